//! PlantUML component-diagram output.
//!
//! Every diagram is a markup block: `@startuml`, the body, `@enduml`.
//!
//! - **Package block**: `package "name"{}` per allowed entry, then
//!   `"from" --> "to"` per edge
//! - **Counted bracket**: `[from] --> [to] : count`
//! - **Plain bracket**: `[from] --> [to]`

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::{AllowList, EdgeGroup, RenderStrategy};

pub const START_MARKER: &str = "@startuml";
pub const END_MARKER: &str = "@enduml";

pub struct PlantUmlFormatter {
    strategy: RenderStrategy,
}

impl PlantUmlFormatter {
    pub fn new(strategy: RenderStrategy) -> Self {
        Self { strategy }
    }

    pub fn format_to_file(
        &self,
        groups: &[EdgeGroup],
        allow_list: Option<&AllowList>,
        output_path: &Path,
    ) -> Result<()> {
        let lines = self.format(groups, allow_list);
        Self::write_lines(&lines, output_path)
    }

    /// Writes one line per entry, UTF-8, replacing any existing file.
    fn write_lines(lines: &[String], output_path: &Path) -> Result<()> {
        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(output_path, content)?;
        Ok(())
    }

    pub fn format(&self, groups: &[EdgeGroup], allow_list: Option<&AllowList>) -> Vec<String> {
        let mut output = Vec::with_capacity(groups.len() + 2);
        output.push(START_MARKER.to_string());

        if self.strategy == RenderStrategy::PackageBlock {
            if let Some(list) = allow_list {
                output.extend(list.entries().iter().map(|name| package_declaration(name)));
            }
        }
        output.extend(groups.iter().map(|group| self.connection(group)));

        output.push(END_MARKER.to_string());
        output
    }

    fn connection(&self, group: &EdgeGroup) -> String {
        let edge = &group.edge;
        match self.strategy {
            RenderStrategy::PackageBlock => format!("\"{}\" --> \"{}\"", edge.from(), edge.to()),
            RenderStrategy::CountedBracket => {
                format!("[{}] --> [{}] : {}", edge.from(), edge.to(), group.count)
            }
            RenderStrategy::PlainBracket => format!("[{}] --> [{}]", edge.from(), edge.to()),
        }
    }
}

fn package_declaration(name: &str) -> String {
    format!("package \"{name}\"{{}}")
}
