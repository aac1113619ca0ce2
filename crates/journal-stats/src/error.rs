//! Error types for the journal metadata dump.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Every error is terminal for the run; nothing here is retried.

use std::path::PathBuf;
use std::time::Duration;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the Crossref API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Wait time suggested by the server
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }
}

/// Errors from fetching, aggregating and writing a journal dump.
#[derive(thiserror::Error, Debug)]
pub enum HarvestError {
    /// Input validation failed
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl HarvestError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create an IO error bound to a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Returns true if this is an input validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for harvest operations.
pub type HarvestResult<T> = Result<T, HarvestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_messages() {
        let err = ClientError::rate_limited(60);
        assert!(err.to_string().contains("60s"));

        let err = ClientError::server(503, "maintenance");
        assert_eq!(err.to_string(), "Server error (503): maintenance");
    }

    #[test]
    fn test_validation_error() {
        let err = HarvestError::validation("issn", "must not be empty");
        assert!(err.is_validation());
        assert!(err.to_string().contains("issn"));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_client_error_wraps() {
        let err: HarvestError = ClientError::not_found("works").into();
        assert!(!err.is_validation());
        assert!(err.to_string().starts_with("API error"));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = HarvestError::io("/out/1234-5678.csv", source);
        assert!(err.to_string().contains("/out/1234-5678.csv"));
    }
}
