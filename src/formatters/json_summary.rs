use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::core::{PipelineConfig, RunReport};

/// Writes a machine-readable record of one conversion run.
pub struct JsonSummaryFormatter {
    /// Pretty-print instead of emitting a single line
    pretty: bool,
}

impl JsonSummaryFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn format_to_file(
        &self,
        config: &PipelineConfig,
        report: &RunReport,
        output_path: &Path,
    ) -> Result<()> {
        let json_content = self.format_report(config, report)?;
        fs::write(output_path, json_content)
            .with_context(|| format!("Failed to write summary {}", output_path.display()))?;
        Ok(())
    }

    pub fn format_report(&self, config: &PipelineConfig, report: &RunReport) -> Result<String> {
        let output = json!({
            "config": {
                "parse": config.parse,
                "grouping": config.grouping,
                "render": config.render,
                "include": config.allow_list.as_ref().map(|list| list.entries()),
                "strip_prefix": config.strip_prefix,
                "package_depth": config.package_depth,
            },
            "report": report,
        });

        if self.pretty {
            Ok(serde_json::to_string_pretty(&output)?)
        } else {
            Ok(serde_json::to_string(&output)?)
        }
    }
}

impl Default for JsonSummaryFormatter {
    fn default() -> Self {
        Self::new()
    }
}
