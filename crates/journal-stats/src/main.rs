//! Journal Stats - Entry Point
//!
//! Dumps a journal's Crossref metadata and frequency tables to CSV.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use journal_stats::config::Config;

#[derive(Parser, Debug)]
#[command(name = "journal-stats")]
#[command(about = "Dump Crossref metadata and title/author/institution frequencies for a journal")]
#[command(version)]
struct Cli {
    /// ISSN of the journal to dump
    issn: String,

    /// Contact email for the Crossref polite pool. Crossref uses it to reach
    /// you if this tool misbehaves; invalid addresses may get banned instead.
    #[arg(env = "CROSSREF_MAILTO")]
    email_address: String,

    /// Directory the CSV files are written to
    #[arg(long, default_value = ".", env = "JOURNAL_STATS_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), issn = %cli.issn, "Starting journal dump");

    let mut config =
        Config::from_env()?.with_mailto(cli.email_address).with_output_dir(cli.output_dir);
    if config.mailto.as_deref().is_some_and(|m| m.trim().is_empty()) {
        tracing::warn!("Empty contact email; requests will not join the Crossref polite pool");
        config.mailto = None;
    }

    let paths = journal_stats::run(config, &cli.issn).await?;

    for path in paths.all() {
        tracing::info!(path = %path.display(), "Wrote");
    }

    Ok(())
}
