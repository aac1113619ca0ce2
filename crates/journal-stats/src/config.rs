//! Configuration for the journal metadata dump.

use std::path::PathBuf;
use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the Crossref REST API.
    pub const BASE_URL: &str = "https://api.crossref.org";

    /// Maximum `rows` accepted by the `/works` endpoint.
    pub const MAX_PER_PAGE: u32 = 1000;

    /// Default page size (the API maximum, fewest round trips).
    pub const PER_PAGE: u32 = MAX_PER_PAGE;

    /// Pause between page requests.
    pub const PAGE_DELAY: Duration = Duration::from_secs(1);

    /// Request timeout. Full 1000-row pages can be slow to assemble.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// User agent sent with every request, before the mailto suffix.
    pub const USER_AGENT: &str = concat!("journal-stats/", env!("CARGO_PKG_VERSION"));
}

/// Record field sets.
pub mod fields {
    /// Fields kept from each Crossref work, in output column order.
    ///
    /// `reference` is left out: full reference lists break spreadsheet imports.
    pub const KEEP: &[&str] = &[
        "DOI",
        "issued",
        "prefix",
        "relation",
        "author",
        "reference-count",
        "ISSN",
        "member",
        "source",
        "score",
        "deposited",
        "indexed",
        "type",
        "published-online",
        "URL",
        "is-referenced-by-count",
        "volume",
        "issn-type",
        "link",
        "published-print",
        "journal-issue",
        "references-count",
        "short-container-title",
        "publisher",
        "content-domain",
        "language",
        "license",
        "created",
        "issue",
        "title",
        "alternative-id",
        "container-title",
        "page",
    ];
}

/// Run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact email for the Crossref polite pool (optional).
    pub mailto: Option<String>,

    /// Base URL for the Crossref API (for testing with mock servers).
    pub api_url: String,

    /// Number of works requested per page.
    pub per_page: u32,

    /// Pause between consecutive page requests.
    pub page_delay: Duration,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Directory the CSV files are written to.
    pub output_dir: PathBuf,
}

impl Config {
    /// Create a new configuration with an optional contact email.
    #[must_use]
    pub fn new(mailto: Option<String>) -> Self {
        Self {
            mailto,
            api_url: api::BASE_URL.to_string(),
            per_page: api::PER_PAGE,
            page_delay: api::PAGE_DELAY,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            output_dir: PathBuf::from("."),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            mailto: Some("tests@example.org".to_string()),
            api_url: base_url.trim_end_matches('/').to_string(),
            per_page: api::PER_PAGE,
            page_delay: Duration::from_millis(0), // No delay in tests
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            output_dir: PathBuf::from("."),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let mailto = std::env::var("CROSSREF_MAILTO").ok().filter(|m| !m.trim().is_empty());
        let mut config = Self::new(mailto);

        if let Ok(url) = std::env::var("CROSSREF_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(dir) = std::env::var("JOURNAL_STATS_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Set the contact email.
    #[must_use]
    pub fn with_mailto(mut self, mailto: impl Into<String>) -> Self {
        self.mailto = Some(mailto.into());
        self
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Check if a contact email is configured.
    #[must_use]
    pub const fn has_mailto(&self) -> bool {
        self.mailto.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.has_mailto());
        assert_eq!(config.per_page, 1000);
        assert_eq!(config.page_delay, Duration::from_secs(1));
        assert_eq!(config.api_url, "https://api.crossref.org");
    }

    #[test]
    fn test_config_builders() {
        let config = Config::new(None).with_mailto("me@example.org").with_output_dir("/tmp/out");
        assert!(config.has_mailto());
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_for_testing_strips_trailing_slash() {
        let config = Config::for_testing("http://127.0.0.1:1234/");
        assert_eq!(config.api_url, "http://127.0.0.1:1234");
        assert_eq!(config.page_delay, Duration::ZERO);
    }

    #[test]
    fn test_fields() {
        assert_eq!(fields::KEEP.len(), 33);
        assert!(fields::KEEP.contains(&"title"));
        assert!(fields::KEEP.contains(&"author"));
        assert!(!fields::KEEP.contains(&"reference"));
    }
}
