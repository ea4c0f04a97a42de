use std::collections::{HashMap, HashSet};

use super::Edge;

/// A distinct edge together with how many times it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeGroup {
    pub edge: Edge,
    pub count: usize,
}

/// Removes repeated edges, keeping the first occurrence of each.
pub fn dedupe(edges: Vec<Edge>) -> Vec<Edge> {
    let mut seen = HashSet::with_capacity(edges.len());
    edges
        .into_iter()
        .filter(|edge| seen.insert(edge.clone()))
        .collect()
}

/// Groups structurally equal edges and orders the groups by source.
///
/// Groups keep first-seen order among equal sources.
pub fn count_and_sort(edges: Vec<Edge>) -> Vec<EdgeGroup> {
    let mut index: HashMap<Edge, usize> = HashMap::new();
    let mut groups: Vec<EdgeGroup> = Vec::new();

    for edge in edges {
        match index.get(&edge) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                index.insert(edge.clone(), groups.len());
                groups.push(EdgeGroup { edge, count: 1 });
            }
        }
    }

    // stable: ties stay in first-seen order
    groups.sort_by(|a, b| a.edge.from().cmp(b.edge.from()));
    groups
}

/// Wraps each edge in a group of one, preserving order.
pub fn singletons(edges: Vec<Edge>) -> Vec<EdgeGroup> {
    edges
        .into_iter()
        .map(|edge| EdgeGroup { edge, count: 1 })
        .collect()
}
