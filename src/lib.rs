//! # JDEPS-PUML
//!
//! Converts `jdeps` dependency listings into PlantUML component diagrams.
//!
//! Each run is a single pass over the whole input: parse every line into an
//! edge, normalise identifiers, filter, group, and render one markup block.
//!
//! ## Conversions
//!
//! - **Simple**: archive-level `from -> to` lines, rendered as packages
//! - **Counted**: class-level lines aggregated to packages, with edge counts
//! - **Deduplicated**: class-level lines aggregated to packages, each edge once

pub mod core;
pub mod formatters;
pub mod parsers;

pub use crate::core::{AllowList, Edge, Pipeline, PipelineConfig, RunReport};
