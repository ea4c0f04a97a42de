use super::{AllowList, Edge};

/// Keeps edges whose endpoints are both allowed and distinct.
///
/// Without an allow-list every endpoint is accepted. Self-references are
/// dropped regardless.
pub fn filter_edges(edges: Vec<Edge>, allow_list: Option<&AllowList>) -> Vec<Edge> {
    edges
        .into_iter()
        .filter(|edge| is_allowed(edge, allow_list))
        .filter(|edge| !edge.is_self_reference())
        .collect()
}

pub fn is_allowed(edge: &Edge, allow_list: Option<&AllowList>) -> bool {
    match allow_list {
        Some(list) => list.contains(edge.from()) && list.contains(edge.to()),
        None => true,
    }
}
