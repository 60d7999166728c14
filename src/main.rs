//! Company-Profiler main entry point
//!
//! This is the command-line interface for the company profile extractor.

use anyhow::Context;
use clap::Parser;
use company_profiler::config::{load_config_with_hash, Config};
use company_profiler::output::{
    export_csv, export_json, format_markdown_table, load_json, print_statistics, BatchStatistics,
};
use company_profiler::pipeline::Coordinator;
use company_profiler::url::split_seed_input;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Company-Profiler: structured company profiles from company websites
///
/// Fetches each URL, extracts contact details, social links and business
/// signals from the page, prints them as a table and writes a CSV export.
#[derive(Parser, Debug)]
#[command(name = "company-profiler")]
#[command(version = "1.0.0")]
#[command(about = "Extracts company profiles from company websites", long_about = None)]
struct Cli {
    /// Company URLs; each argument may hold several comma-separated URLs
    #[arg(value_name = "URLS", required_unless_present = "from_json")]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the CSV export here instead of the configured path
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Also write a JSON export of the full records
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Convert a previous JSON export to CSV without fetching anything
    #[arg(long, value_name = "FILE", conflicts_with = "urls")]
    from_json: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    let csv_path = cli
        .csv
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.csv_path));

    if let Some(input) = &cli.from_json {
        return handle_from_json(input, &csv_path);
    }

    let json_path = cli
        .json
        .clone()
        .or_else(|| config.output.json_path.as_ref().map(PathBuf::from));

    handle_batch(config, &cli.urls, &csv_path, json_path.as_deref(), cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("company_profiler=info,warn"),
            1 => EnvFilter::new("company_profiler=debug,info"),
            2 => EnvFilter::new("company_profiler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --from-json mode: rebuilds the CSV export from saved records
fn handle_from_json(input: &Path, csv_path: &Path) -> anyhow::Result<()> {
    let records = load_json(input).with_context(|| format!("failed to read {}", input.display()))?;
    export_csv(&records, csv_path)?;

    println!("✓ {} records exported to: {}", records.len(), csv_path.display());
    Ok(())
}

/// Handles the main profiling run
async fn handle_batch(
    config: Config,
    inputs: &[String],
    csv_path: &Path,
    json_path: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let urls = split_seed_input(inputs);
    if urls.is_empty() {
        anyhow::bail!("no URLs given");
    }
    tracing::info!("Total seed URLs: {}", urls.len());

    let coordinator = Coordinator::new(config).context("failed to build HTTP client")?;
    let records = coordinator.run(&urls).await;

    if records.is_empty() {
        tracing::warn!("No valid URLs to profile");
        return Ok(());
    }

    if !quiet {
        println!("{}", format_markdown_table(&records));
        print_statistics(&BatchStatistics::from_records(&records));
        println!();
    }

    export_csv(&records, csv_path)?;
    println!("✓ CSV exported to: {}", csv_path.display());

    if let Some(path) = json_path {
        export_json(&records, path)?;
        println!("✓ JSON exported to: {}", path.display());
    }

    Ok(())
}
