//! Journal Stats
//!
//! Dumps Crossref metadata for every work published under a journal ISSN and
//! derives three frequency tables from the corpus.
//!
//! # Pipeline
//!
//! - **Fetch**: page through `/works?filter=issn:…`, one request per second
//! - **Filter**: drop untitled works, project the rest to [`config::fields::KEEP`]
//! - **Aggregate**: title words, author bylines, institutions
//! - **Write**: `<issn>.csv` plus one `<issn>_*_frequency.csv` per table
//!
//! # Example
//!
//! ```no_run
//! use journal_stats::{client::CrossrefClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new(Some("you@example.org".to_string()));
//!     let client = CrossrefClient::new(config.clone())?;
//!
//!     let papers = journal_stats::harvest::collect_papers(&client, "0028-0836").await?;
//!     journal_stats::output::write_derived_products(&papers, "0028-0836", &config.output_dir)?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod harvest;
pub mod models;
pub mod output;
pub mod stats;

pub use client::CrossrefClient;
pub use config::Config;
pub use error::{ClientError, HarvestError};
pub use output::OutputPaths;

/// Fetch every work for `issn`, then write the dump and frequency tables.
///
/// Nothing is written if fetching fails.
///
/// # Errors
///
/// Returns a validation error for an empty ISSN, or the first API, CSV or
/// filesystem error encountered.
pub async fn run(config: Config, issn: &str) -> anyhow::Result<OutputPaths> {
    harvest::validate_issn(issn)?;

    let output_dir = config.output_dir.clone();
    let client = CrossrefClient::new(config)?;

    let papers = harvest::collect_papers(&client, issn).await?;
    let paths = output::write_derived_products(&papers, issn, &output_dir)?;
    Ok(paths)
}
