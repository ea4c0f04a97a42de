use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use super::filter::filter_edges;
use super::grouping::{count_and_sort, dedupe, singletons, EdgeGroup};
use super::{Edge, GroupingPolicy, PipelineConfig};
use crate::formatters::PlantUmlFormatter;
use crate::parsers::{LineParser, ParserFactory};

/// Side channel notified of every edge that survives filtering.
pub trait EdgeObserver {
    fn observe(&mut self, edge: &Edge);
}

/// Prints each surviving edge on stdout.
pub struct StdoutEdgeEcho;

impl EdgeObserver for StdoutEdgeEcho {
    fn observe(&mut self, edge: &Edge) {
        println!("{edge}");
    }
}

pub struct NoopObserver;

impl EdgeObserver for NoopObserver {
    fn observe(&mut self, _edge: &Edge) {}
}

/// Counters gathered while processing one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub lines_read: usize,
    pub lines_parsed: usize,
    pub edges_after_dedupe: usize,
    pub edges_kept: usize,
}

impl PipelineStats {
    pub fn lines_skipped(&self) -> usize {
        self.lines_read - self.lines_parsed
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub groups: Vec<EdgeGroup>,
    pub stats: PipelineStats,
}

/// Summary of a completed file-to-file run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub lines_read: usize,
    pub lines_parsed: usize,
    pub lines_skipped: usize,
    pub edges_after_dedupe: usize,
    pub edges_kept: usize,
    pub connections_rendered: usize,
    pub elapsed_ms: u128,
}

/// Single-pass conversion: parse, normalise, filter, group, render.
pub struct Pipeline {
    config: PipelineConfig,
    parser: Box<dyn LineParser + Send + Sync>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let parser = ParserFactory::new().get_parser(config.parse);
        Ok(Self { config, parser })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Parses and normalises one line, without any filtering.
    pub fn normalize_line(&self, line: &str) -> Option<Edge> {
        let edge = self.parser.parse_line(line)?;
        let edge = match self.config.package_depth {
            Some(depth) => edge.to_package(depth),
            None => edge,
        };
        Some(edge.strip_prefix(&self.config.strip_prefix))
    }

    pub fn process_lines<'a, I>(&self, lines: I, observer: &mut dyn EdgeObserver) -> PipelineOutput
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut stats = PipelineStats::default();
        let mut edges = Vec::new();

        for line in lines {
            stats.lines_read += 1;
            if let Some(edge) = self.normalize_line(line) {
                stats.lines_parsed += 1;
                edges.push(edge);
            }
        }
        debug!(
            read = stats.lines_read,
            parsed = stats.lines_parsed,
            "parsed input lines"
        );

        if self.config.grouping == GroupingPolicy::Dedupe {
            edges = dedupe(edges);
        }
        stats.edges_after_dedupe = edges.len();

        let edges = filter_edges(edges, self.config.allow_list.as_ref());
        stats.edges_kept = edges.len();
        debug!(kept = stats.edges_kept, "filtered edges");

        for edge in &edges {
            observer.observe(edge);
        }

        let groups = match self.config.grouping {
            GroupingPolicy::CountAndSort => count_and_sort(edges),
            GroupingPolicy::None | GroupingPolicy::Dedupe => singletons(edges),
        };

        PipelineOutput { groups, stats }
    }

    /// Renders processed groups into diagram lines.
    pub fn render(&self, output: &PipelineOutput) -> Vec<String> {
        PlantUmlFormatter::new(self.config.render)
            .format(&output.groups, self.config.allow_list.as_ref())
    }

    /// Reads `input` whole, converts it, and writes `output` in one go.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RunReport> {
        let start = Instant::now();

        let content = fs::read_to_string(input)
            .with_context(|| format!("Failed to read dependency listing {}", input.display()))?;
        info!(path = %input.display(), bytes = content.len(), "loaded input");

        let processed = if self.config.echo_edges {
            self.process_lines(content.lines(), &mut StdoutEdgeEcho)
        } else {
            self.process_lines(content.lines(), &mut NoopObserver)
        };

        PlantUmlFormatter::new(self.config.render)
            .format_to_file(&processed.groups, self.config.allow_list.as_ref(), output)
            .with_context(|| format!("Failed to write diagram {}", output.display()))?;
        info!(path = %output.display(), connections = processed.groups.len(), "diagram written");

        let stats = processed.stats;
        Ok(RunReport {
            lines_read: stats.lines_read,
            lines_parsed: stats.lines_parsed,
            lines_skipped: stats.lines_skipped(),
            edges_after_dedupe: stats.edges_after_dedupe,
            edges_kept: stats.edges_kept,
            connections_rendered: processed.groups.len(),
            elapsed_ms: start.elapsed().as_millis(),
        })
    }
}
