use super::LineParser;
use crate::core::Edge;

const SEPARATOR: &str = " -> ";

/// Parses `from -> to` lines such as jdeps' archive summary.
///
/// The separator must be exactly one space, an arrow, and one space. The
/// line is split on its first occurrence; everything after it is the target.
pub struct ArrowParser;

impl ArrowParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArrowParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for ArrowParser {
    fn parse_line(&self, line: &str) -> Option<Edge> {
        let (from, to) = line.split_once(SEPARATOR)?;
        Some(Edge::new(from, to))
    }

    fn strategy_name(&self) -> &str {
        "arrow"
    }
}
