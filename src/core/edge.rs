use serde::Serialize;
use std::fmt;

/// A directed dependency between two named entities.
///
/// Edges are never mutated: every normalisation step returns a new value.
/// Equality and hashing are structural over all three fields.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct Edge {
    from: String,
    to: String,
    /// Archive the destination lives in (class-level listings only).
    archive: Option<String>,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            archive: None,
        }
    }

    pub fn with_archive(mut self, archive: impl Into<String>) -> Self {
        self.archive = Some(archive.into());
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn archive(&self) -> Option<&str> {
        self.archive.as_deref()
    }

    pub fn is_self_reference(&self) -> bool {
        self.from == self.to
    }

    /// Removes every occurrence of `prefix` from both endpoints.
    ///
    /// The archive is carried over untouched. An empty prefix is a no-op.
    pub fn strip_prefix(&self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self.clone();
        }
        Self {
            from: self.from.replace(prefix, ""),
            to: self.to.replace(prefix, ""),
            archive: self.archive.clone(),
        }
    }

    /// Collapses both endpoints to their leading `depth` dot-separated segments.
    pub fn to_package(&self, depth: usize) -> Self {
        Self {
            from: package_of(&self.from, depth),
            to: package_of(&self.to, depth),
            archive: self.archive.clone(),
        }
    }
}

/// Leading `depth` segments of a dotted identifier.
///
/// Identifiers with fewer segments come back whole; a depth of zero
/// yields the empty string.
pub fn package_of(identifier: &str, depth: usize) -> String {
    identifier
        .split('.')
        .take(depth)
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.archive {
            Some(archive) => write!(f, "[{}] --> [{}] ({})", self.from, self.to, archive),
            None => write!(f, "[{}] --> [{}]", self.from, self.to),
        }
    }
}
