#![warn(missing_docs)]
//! BundleBench CLI
//!
//! Builds the same React Native application through Metro, Re.Pack, and
//! Expo export across a fixed variant matrix, measures the resulting bundle
//! sizes, and reports size deltas against the baseline producer.
//!
//! The run is strictly sequential and fail-fast: any build failure aborts
//! the whole run with a non-zero exit status and no partial report.

mod config;
mod executor;
mod process;
mod producer;
mod store;

pub use config::{AppConfig, BenchConfig, OutputConfig, ToolsConfig};
pub use executor::{build_report, format_human_output, Orchestrator};
pub use process::{run_command, spec_from_tool, CommandSpec, ProcessError};
pub use producer::{
    BuildContext, BuildError, BytecodeCompiler, ExpoAdapter, MetroAdapter, ProducerAdapter,
    RepackAdapter,
};
pub use store::{ArtifactStore, StoreError};

use bundlebench_compare::compare_outcomes;
use bundlebench_core::{variant_matrix, Producer};
use bundlebench_report::{generate_github_summary, generate_json_report, OutputFormat};
use clap::{Parser, Subcommand};
use regex::Regex;
use std::path::PathBuf;
use std::time::Instant;

/// BundleBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "bundlebench")]
#[command(author, version, about = "BundleBench - bundle size benchmark for React Native toolchains")]
pub struct Cli {
    /// Optional subcommand (List, Run); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter listed variants by regex pattern on the variant id
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Output format: json, github-summary, human
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory of the React Native application
    #[arg(long)]
    pub app_dir: Option<PathBuf>,

    /// Workspace directory for produced artifacts
    #[arg(long)]
    pub workspace: Option<PathBuf>,

    /// Target platform passed to every producer
    #[arg(long)]
    pub platform: Option<String>,

    /// Entry file passed to the bundlers
    #[arg(long)]
    pub entry_file: Option<String>,

    /// Baseline producer: metro, repack, expo
    #[arg(long)]
    pub baseline: Option<Producer>,

    /// Dry run - list the variant matrix without building
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the variant matrix
    List,
    /// Build, measure, and compare all variants (default)
    Run,
    /// Print a default bundlebench.toml to stdout
    InitConfig,
}

/// Run the BundleBench CLI. This is the binary's entry point.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the BundleBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("bundlebench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("bundlebench=info")
            .init();
    }

    // Discover bundlebench.toml configuration (CLI flags override)
    let mut config = BenchConfig::discover().unwrap_or_default();
    apply_overrides(&mut config, &cli);

    // Resolve format: CLI wins if explicitly set, else config file
    let format_name = if cli.format != "human" {
        cli.format.clone()
    } else {
        config.output.format.clone()
    };
    let format: OutputFormat = format_name
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    match cli.command {
        Some(Commands::List) => list_variants(&cli),
        Some(Commands::InitConfig) => {
            print!("{}", BenchConfig::default_toml());
            Ok(())
        }
        Some(Commands::Run) | None => {
            if cli.dry_run {
                list_variants(&cli)
            } else {
                run_benchmark(&cli, &config, format)
            }
        }
    }
}

fn apply_overrides(config: &mut BenchConfig, cli: &Cli) {
    if let Some(dir) = &cli.app_dir {
        config.app.dir = dir.clone();
    }
    if let Some(workspace) = &cli.workspace {
        config.output.workspace = workspace.clone();
    }
    if let Some(platform) = &cli.platform {
        config.app.platform = platform.clone();
    }
    if let Some(entry_file) = &cli.entry_file {
        config.app.entry_file = entry_file.clone();
    }
    if let Some(baseline) = cli.baseline {
        config.app.baseline = baseline;
    }
}

/// Print the variant matrix, optionally filtered by regex on the id.
fn list_variants(cli: &Cli) -> anyhow::Result<()> {
    let filter = Regex::new(&cli.filter)?;
    let matrix = variant_matrix();
    let selected: Vec<_> = matrix.iter().filter(|v| filter.is_match(&v.id())).collect();

    println!("BundleBench Plan:");
    for variant in &selected {
        println!(
            "├── {} ({} {})",
            variant.id(),
            variant.producer,
            variant.kind_label()
        );
    }
    println!("{} variants selected.", selected.len());
    Ok(())
}

/// The full pipeline: build everything, measure, compare, render.
fn run_benchmark(cli: &Cli, config: &BenchConfig, format: OutputFormat) -> anyhow::Result<()> {
    let store = ArtifactStore::new(config.workspace_path());
    let orchestrator = Orchestrator::new(config, store);

    let start = Instant::now();
    let outcomes = orchestrator.run()?;
    let groups = compare_outcomes(&variant_matrix(), &outcomes, config.app.baseline)?;
    let total_duration_ms = start.elapsed().as_secs_f64() * 1000.0;

    let report = build_report(config, &outcomes, &groups, total_duration_ms);
    let rendered = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::GithubSummary => generate_github_summary(&report),
        OutputFormat::Human => format_human_output(&report),
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("Report written to: {}", path.display());
        }
        None => {
            println!("{}", rendered);
        }
    }
    Ok(())
}
