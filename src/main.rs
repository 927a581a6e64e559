//! Robots-Audit main entry point
//!
//! This is the command-line interface for the Robots-Audit analyzer.

use anyhow::{bail, Context};
use clap::Parser;
use robots_audit::config::{load_config_with_hash, validate, Config, DEFAULT_CONFIG_HASH};
use robots_audit::output::{export_results, print_statistics, write_export, BatchStatistics, ExportFormat};
use robots_audit::storage::{SqliteStorage, Storage};
use robots_audit::url::{limit_batch, parse_url_list};
use robots_audit::{AnalysisResult, Analyzer};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Number of stored analyses shown by --history
const HISTORY_LIMIT: usize = 50;

/// Robots-Audit: Google crawler access checks
///
/// Fetches the robots.txt of every given site and reports whether Google's
/// crawlers are disallowed, together with the rules that apply to them.
#[derive(Parser, Debug)]
#[command(name = "robots-audit")]
#[command(version)]
#[command(about = "Check robots.txt files for rules blocking Google crawlers", long_about = None)]
struct Cli {
    /// URLs or bare domains to analyze
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Read URLs from a file, one per line ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of concurrent workers (overrides the configuration)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Export format: json, csv or txt
    #[arg(short, long, default_value = "txt", value_parser = ExportFormat::from_str)]
    format: ExportFormat,

    /// Write the export to a file or directory instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Persist the results to the database
    #[arg(long)]
    save: bool,

    /// Label stored with a saved analysis
    #[arg(long, requires = "save")]
    batch_name: Option<String>,

    /// List stored analyses and exit
    #[arg(long, conflicts_with_all = ["show", "delete", "save"])]
    history: bool,

    /// Export a stored analysis and exit
    #[arg(long, value_name = "ID", conflicts_with_all = ["history", "delete", "save"])]
    show: Option<i64>,

    /// Delete a stored analysis and exit
    #[arg(long, value_name = "ID", conflicts_with_all = ["history", "show", "save"])]
    delete: Option<i64>,

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

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (cfg, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        None => (Config::default(), DEFAULT_CONFIG_HASH.to_string()),
    };

    if let Some(workers) = cli.workers {
        config.analyzer.max_workers = workers;
        validate(&config).context("Invalid --workers value")?;
    }

    if cli.history {
        handle_history(&config)
    } else if let Some(id) = cli.show {
        handle_show(&config, id, cli.format, cli.output.as_deref())
    } else if let Some(id) = cli.delete {
        handle_delete(&config, id)
    } else {
        handle_analyze(&cli, &config, &config_hash).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robots_audit=info,warn"),
            1 => EnvFilter::new("robots_audit=debug,info"),
            2 => EnvFilter::new("robots_audit=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so stdout stays clean for exports
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Collects URLs from positional arguments and the optional input file
fn gather_urls(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let mut urls: Vec<String> = cli
        .urls
        .iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect();

    if let Some(input) = &cli.input {
        let text = if input.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read URLs from stdin")?;
            buf
        } else {
            std::fs::read_to_string(input)
                .with_context(|| format!("Failed to read URL list {}", input.display()))?
        };
        urls.extend(parse_url_list(&text));
    }

    Ok(urls)
}

/// Handles the default mode: analyze URLs and export the results
async fn handle_analyze(cli: &Cli, config: &Config, config_hash: &str) -> anyhow::Result<()> {
    let urls = gather_urls(cli)?;
    if urls.is_empty() {
        bail!("No URLs given. Pass URLs as arguments or use --input FILE");
    }

    let (urls, dropped) = limit_batch(urls, config.analyzer.max_batch_size);
    if dropped > 0 {
        tracing::warn!(
            "Batch limited to {} URLs; {} URLs were dropped",
            config.analyzer.max_batch_size,
            dropped
        );
    }

    let analyzer = Analyzer::new(&config.analyzer)?;
    let results = analyzer.analyze_batch(&urls).await?;

    if !cli.quiet {
        print_statistics(&BatchStatistics::from_results(&results));
    }

    emit(&results, cli.format, cli.output.as_deref())?;

    if cli.save {
        let mut storage = open_storage(config)?;
        let analysis_id = storage.create_analysis(cli.batch_name.as_deref(), config_hash)?;
        storage.save_results(analysis_id, &results)?;
        tracing::info!(
            "Saved {} results as analysis {} in {}",
            results.len(),
            analysis_id,
            config.output.database_path
        );
    }

    Ok(())
}

/// Handles --history: lists stored analyses
fn handle_history(config: &Config) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let records = storage.list_analyses(HISTORY_LIMIT)?;

    if records.is_empty() {
        println!("No stored analyses in {}", config.output.database_path);
        return Ok(());
    }

    println!("{:>6}  {:<32}  {:>7}  {}", "ID", "Created", "Results", "Batch");
    for record in records {
        println!(
            "{:>6}  {:<32}  {:>7}  {}",
            record.id,
            record.created_at,
            record.result_count,
            record.batch_name.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

/// Handles --show: re-exports a stored analysis
fn handle_show(
    config: &Config,
    analysis_id: i64,
    format: ExportFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let results = storage.load_results(analysis_id)?;
    emit(&results, format, output)
}

/// Handles --delete: removes a stored analysis
fn handle_delete(config: &Config, analysis_id: i64) -> anyhow::Result<()> {
    let mut storage = open_storage(config)?;
    storage.delete_analysis(analysis_id)?;
    tracing::info!("Deleted analysis {}", analysis_id);
    Ok(())
}

fn open_storage(config: &Config) -> anyhow::Result<SqliteStorage> {
    let path = Path::new(&config.output.database_path);
    SqliteStorage::new(path).with_context(|| format!("Failed to open database {}", path.display()))
}

/// Writes an export to stdout, or to `output` when given
fn emit(results: &[AnalysisResult], format: ExportFormat, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let written = write_export(results, format, path)?;
            tracing::info!("Exported {} results to {}", results.len(), written.display());
        }
        None => print!("{}", export_results(results, format)?),
    }
    Ok(())
}
