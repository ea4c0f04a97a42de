use regex::Regex;
use std::sync::LazyLock;

use super::LineParser;
use crate::core::Edge;

/// `   com.foo.A   ->   com.bar.B   bar.jar`; the match may start anywhere.
///
/// Whitespace is the ASCII set jdeps emits; U+00A0 and friends are token text.
static CLASS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let ws = r"[ \t\n\x0B\f\r]";
    let token = r"[^ \t\n\x0B\f\r]";
    Regex::new(&format!(
        r"{ws}+({token}+){ws}+->{ws}+({token}+){ws}+({token}*.jar)"
    ))
    .expect("class line pattern is valid")
});

/// Parses jdeps verbose class-level lines into edges carrying the target archive.
pub struct ClassLineParser {
    pattern: &'static Regex,
}

impl ClassLineParser {
    pub fn new() -> Self {
        Self {
            pattern: &CLASS_LINE,
        }
    }
}

impl Default for ClassLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for ClassLineParser {
    fn parse_line(&self, line: &str) -> Option<Edge> {
        let captures = self.pattern.captures(line)?;
        Some(Edge::new(&captures[1], &captures[2]).with_archive(&captures[3]))
    }

    fn strategy_name(&self) -> &str {
        "class-line"
    }
}
