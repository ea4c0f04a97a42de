use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Package depth used by the deduplicating converter.
pub const DEDUP_PACKAGE_DEPTH: usize = 4;

/// Separator between entries of a raw include list.
const INCLUDE_SEPARATOR: char = ';';

/// Identifiers a run is restricted to, in declaration order.
///
/// `entries` keeps duplicates for rendering; lookups go through the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowList {
    entries: Vec<String>,
    #[serde(skip)]
    lookup: HashSet<String>,
}

impl AllowList {
    /// Parses a `;`-separated include list.
    ///
    /// Returns `None` for a blank list or when no entries remain, which
    /// callers treat as "unrestricted". Empty segments are dropped; repeated
    /// entries are kept so each one still gets declared.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Self::from_entries(raw.split(INCLUDE_SEPARATOR))
    }

    pub fn from_entries<I, S>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self {
            entries: Vec::new(),
            lookup: HashSet::new(),
        };
        for entry in entries {
            let entry = entry.into();
            if entry.is_empty() {
                continue;
            }
            list.lookup.insert(entry.clone());
            list.entries.push(entry);
        }

        if list.entries.is_empty() {
            None
        } else {
            Some(list)
        }
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.lookup.contains(identifier)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How raw lines become edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseStrategy {
    /// `from -> to`, split on the first literal separator.
    Arrow,
    /// Indented jdeps class line: `from -> to archive.jar`.
    ClassLine,
}

/// How surviving edges are combined before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingPolicy {
    /// Keep every edge in input order.
    None,
    /// Count structurally equal edges and order groups by source.
    CountAndSort,
    /// Drop repeated edges, keeping the first occurrence.
    Dedupe,
}

/// Shape of the rendered connection lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStrategy {
    /// Package declarations followed by quoted connections.
    PackageBlock,
    /// Bracketed components annotated with an occurrence count.
    CountedBracket,
    /// Bracketed components without annotation.
    PlainBracket,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineConfig {
    pub parse: ParseStrategy,
    pub grouping: GroupingPolicy,
    pub render: RenderStrategy,
    /// `None` disables the allow-list filter.
    pub allow_list: Option<AllowList>,
    pub strip_prefix: String,
    /// Aggregate identifiers to this many segments before stripping.
    pub package_depth: Option<usize>,
    /// Report each surviving edge on stdout as it is produced.
    pub echo_edges: bool,
}

impl PipelineConfig {
    /// Plain `from -> to` listing rendered as a package block.
    pub fn simple(allow_list: Option<AllowList>, strip_prefix: impl Into<String>) -> Self {
        Self {
            parse: ParseStrategy::Arrow,
            grouping: GroupingPolicy::None,
            render: RenderStrategy::PackageBlock,
            allow_list,
            strip_prefix: strip_prefix.into(),
            package_depth: None,
            echo_edges: false,
        }
    }

    /// Class-level listing aggregated to packages and counted.
    pub fn counted(
        allow_list: Option<AllowList>,
        strip_prefix: impl Into<String>,
        package_depth: usize,
    ) -> Self {
        Self {
            parse: ParseStrategy::ClassLine,
            grouping: GroupingPolicy::CountAndSort,
            render: RenderStrategy::CountedBracket,
            allow_list,
            strip_prefix: strip_prefix.into(),
            package_depth: Some(package_depth),
            echo_edges: false,
        }
    }

    /// Class-level listing aggregated to packages and de-duplicated.
    pub fn deduplicated(allow_list: Option<AllowList>, strip_prefix: impl Into<String>) -> Self {
        Self {
            parse: ParseStrategy::ClassLine,
            grouping: GroupingPolicy::Dedupe,
            render: RenderStrategy::PlainBracket,
            allow_list,
            strip_prefix: strip_prefix.into(),
            package_depth: Some(DEDUP_PACKAGE_DEPTH),
            echo_edges: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.render == RenderStrategy::PackageBlock && self.allow_list.is_none() {
            bail!("An include list is required to render package declarations");
        }
        if self.package_depth == Some(0) {
            bail!("Package depth must be at least 1");
        }
        Ok(())
    }
}
