mod models;
mod service;
mod utils;

use crate::models::config::{setup_config, Config};
use crate::service::scan::{run_scan, ScanOptions};
use crate::service::upload::{Collector, DryRunCollector, HttpCollector};
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

#[derive(Parser)]
#[command(name = "RustyMetaScan")]
#[command(about = "Inventories file metadata and reports it to a collector", long_about = None)]
struct Cli {
    #[arg(
        short = 'c',
        long = "config",
        default_value = "config.json",
        env = "RUSTYMETASCAN_CONFIG"
    )]
    config_file: String,

    #[arg(
        short = 'l',
        long = "log-level",
        default_value = "info",
        env = "LOG_LEVEL"
    )]
    log_level: String,

    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    #[arg(short = 'v', long = "validate-only")]
    validate_only: bool,

    #[arg(short = 'd', long = "dry-run")]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(parse_log_level(&args.log_level))
        .format_timestamp_secs()
        .init();

    info!("RustyMetaScan starting...");
    let config: Config = setup_config(
        args.config_file
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string(),
    )
    .context("Failed to load configuration")?;
    debug!("Loaded config: {:?}", &config);

    if args.validate_only {
        info!("Configuration is valid. Exiting (--validate-only mode).");
        return Ok(());
    }

    let collector: Box<dyn Collector> = if args.dry_run {
        info!("Running in DRY RUN mode - nothing will be sent to the collector");
        Box::new(DryRunCollector)
    } else {
        Box::new(
            HttpCollector::new(config.collector_url())
                .context("Failed to set up the collector client")?,
        )
    };

    let summary = run_scan(
        &config,
        collector.as_ref(),
        ScanOptions { quiet: args.quiet },
    )
    .context("Scan failed")?;

    info!(
        "Run {} completed: {} files across {} paths",
        summary.run_id, summary.files_count, summary.paths_scanned
    );
    Ok(())
}

fn parse_log_level(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}
