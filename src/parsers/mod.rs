pub mod arrow;
pub mod class_line;

use crate::core::{Edge, ParseStrategy};

/// Turns one line of dependency listing into an edge.
///
/// Parsers are total: lines that do not have the expected shape yield
/// `None`, never an error.
pub trait LineParser {
    fn parse_line(&self, line: &str) -> Option<Edge>;

    /// Treats a missing line like an empty one.
    fn parse_optional(&self, line: Option<&str>) -> Option<Edge> {
        self.parse_line(line.unwrap_or_default())
    }

    fn strategy_name(&self) -> &str;
}

pub struct ParserFactory;

impl ParserFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn get_parser(&self, strategy: ParseStrategy) -> Box<dyn LineParser + Send + Sync> {
        match strategy {
            ParseStrategy::Arrow => Box::new(arrow::ArrowParser::new()),
            ParseStrategy::ClassLine => Box::new(class_line::ClassLineParser::new()),
        }
    }
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}
