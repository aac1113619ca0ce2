//! Integration tests against the live Crossref API.
//!
//! Run with: `cargo test --features integration -- --nocapture`
//! Set `CROSSREF_MAILTO` to join the polite pool.

#![cfg(feature = "integration")]

use journal_stats::client::CrossrefClient;
use journal_stats::config::Config;
use journal_stats::harvest::fetch_page;

/// Well-known ISSNs for testing.
mod issns {
    /// Nature (print)
    pub const NATURE: &str = "0028-0836";
    /// Syntactically valid, assigned to nothing
    pub const UNUSED: &str = "0000-0000";
}

fn create_client(per_page: u32) -> CrossrefClient {
    let mut config = Config::from_env().expect("valid environment");
    config.per_page = per_page;
    CrossrefClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_fetch_first_page() {
    let client = create_client(20);
    let page = fetch_page(&client, issns::NATURE, 0).await.expect("Fetch should succeed");

    assert!(page.total_results > 1000, "Nature has published plenty");
    assert_eq!(page.items.len(), 20);
    println!("Nature: {} works, {} kept on page 1", page.total_results, page.kept_records().len());
}

#[tokio::test]
async fn test_fetch_unused_issn() {
    let client = create_client(20);
    let page = fetch_page(&client, issns::UNUSED, 0).await.expect("Fetch should succeed");

    assert_eq!(page.total_results, 0);
    assert!(page.items.is_empty());
}
