use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use jdeps_puml::core::{AllowList, Pipeline, PipelineConfig};
use jdeps_puml::formatters::JsonSummaryFormatter;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "jdeps-puml",
    version = "0.1.0",
    author = "jdeps-puml developers",
    about = "Convert jdeps dependency listings into PlantUML diagrams"
)]
struct Cli {
    /// Also write a JSON summary of the run to this file
    #[arg(long, value_name = "FILE", global = true)]
    summary: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Archive-level `from -> to` listing, rendered as packages
    Simple {
        /// jdeps output to read
        input: PathBuf,
        /// PlantUML file to write
        output: PathBuf,
        /// `;`-separated identifiers to keep (required)
        includes: String,
        /// Text removed from every identifier
        prefix: String,
    },
    /// Class-level listing aggregated to packages, with edge counts
    Counted {
        input: PathBuf,
        output: PathBuf,
        /// `;`-separated identifiers to keep, empty for all
        includes: String,
        prefix: String,
        /// Number of leading package segments to keep
        #[arg(allow_negative_numbers = true)]
        depth: i64,
    },
    /// Class-level listing aggregated to packages, each edge once
    Dedup {
        input: PathBuf,
        output: PathBuf,
        /// `;`-separated identifiers to keep, empty for all
        includes: String,
        prefix: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    run(cli)
}

fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli { summary, command } = cli;

    let (input, output, config) = match command {
        Command::Simple {
            input,
            output,
            includes,
            prefix,
        } => (
            input,
            output,
            PipelineConfig::simple(AllowList::parse(&includes), prefix),
        ),
        Command::Counted {
            input,
            output,
            includes,
            prefix,
            depth,
        } => {
            let depth = usize::try_from(depth)
                .map_err(|_| anyhow::anyhow!("Package depth must be at least 1, got {depth}"))?;
            (
                input,
                output,
                PipelineConfig::counted(AllowList::parse(&includes), prefix, depth),
            )
        }
        Command::Dedup {
            input,
            output,
            includes,
            prefix,
        } => (
            input,
            output,
            PipelineConfig::deduplicated(AllowList::parse(&includes), prefix),
        ),
    };

    let pipeline = Pipeline::new(config)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        "starting conversion"
    );

    let report = pipeline.run(&input, &output)?;

    if let Some(summary_path) = summary {
        JsonSummaryFormatter::new().format_to_file(pipeline.config(), &report, &summary_path)?;
        tracing::info!(path = %summary_path.display(), "summary written");
    }

    println!(
        "Wrote {} ({} connections from {} of {} lines) in {}ms",
        output.display(),
        report.connections_rendered,
        report.lines_parsed,
        report.lines_read,
        report.elapsed_ms
    );

    Ok(())
}
