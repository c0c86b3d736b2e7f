//! Backup Monitor - Main entry point
//!
//! Verifies that the dated backup folders in an object-storage bucket exist
//! and have a plausible size compared to the previous day, then prints or
//! delivers a summary.

use anyhow::Result;
use backup_monitor::{
    config::Config,
    monitor::ServerStats,
    report::{webhook, CheckSummary},
    storage::S3Store,
    utils,
};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bucket holding the backups (overrides config)
    #[arg(short, long)]
    bucket: Option<String>,

    /// Backup folder to check; repeat for several (overrides config)
    #[arg(short, long)]
    folder: Vec<String>,

    /// Reference date for the check, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Print per-server JSON to stdout instead of delivering the summary
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };
    config.apply_env();
    if let Some(bucket) = args.bucket {
        config.check.bucket = bucket;
    }
    if !args.folder.is_empty() {
        config.check.folders = args.folder.clone();
    }

    // Initialize logging
    let log_level = args.log_level.as_deref().unwrap_or(&config.log.level);
    utils::logger::init(log_level)?;

    config.validate()?;
    let reference_date = args.date.unwrap_or_else(|| Local::now().date_naive());

    tracing::info!(
        "Starting backup-monitor v{} (bucket: {}, {} folders, reference date: {})",
        env!("CARGO_PKG_VERSION"),
        config.check.bucket,
        config.check.folders.len(),
        reference_date
    );

    let store = S3Store::from_env(&config.check.bucket).await;

    tracing::info!("Performing backup check...");
    let mut stats = Vec::new();
    for folder in &config.check.folders {
        let server = ServerStats::collect(&store, folder, reference_date).await?;
        if server.is_healthy() {
            tracing::info!("{}: {}", folder, server.status.tag());
        } else {
            tracing::warn!(
                "{}: {}",
                folder,
                server.status.message(server.last_size, server.second_last_size)
            );
        }
        stats.push(server);
    }

    let summary = CheckSummary::new(stats, reference_date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary.to_json())?);
        return Ok(());
    }

    tracing::info!(
        "Finished backup check ({}/{} healthy). Sending out summary...",
        summary.healthy_count(),
        summary.stats.len()
    );

    match &config.report.webhook_url {
        Some(url) => {
            let client = reqwest::Client::new();
            webhook::send_summary(&client, url, &summary).await?;
        }
        None => println!("{}", summary.to_text()),
    }

    tracing::info!("Done!");
    Ok(())
}
