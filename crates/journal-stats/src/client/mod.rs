//! Crossref REST API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Polite-pool identification (`mailto` in the user agent and query)
//! - Status-code mapping onto [`ClientError`]
//!
//! Requests are never retried; pacing between pages is the caller's job.

use reqwest::Client;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{WorkList, WorksResponse};

/// Crossref API client.
#[derive(Clone)]
pub struct CrossrefClient {
    /// HTTP client.
    client: Client,

    /// Contact email sent with each request (optional).
    mailto: Option<String>,

    /// API base URL.
    api_url: String,

    /// Rows requested per page.
    per_page: u32,

    /// Pause between consecutive page requests.
    page_delay: std::time::Duration,
}

impl CrossrefClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "application/json".parse().expect("valid accept header"),
        );

        let user_agent = match config.mailto.as_deref() {
            Some(email) => format!("{} (mailto:{email})", api::USER_AGENT),
            None => api::USER_AGENT.to_string(),
        };

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            mailto: config.mailto,
            api_url: config.api_url,
            per_page: config.per_page,
            page_delay: config.page_delay,
        })
    }

    /// Check if a contact email is configured.
    #[must_use]
    pub fn has_mailto(&self) -> bool {
        self.mailto.is_some()
    }

    /// Rows requested per page.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Pause between consecutive page requests.
    #[must_use]
    pub const fn page_delay(&self) -> std::time::Duration {
        self.page_delay
    }

    /// Get one page of works published under an ISSN.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn journal_works(
        &self,
        issn: &str,
        offset: u64,
        rows: u32,
    ) -> ClientResult<WorkList> {
        let url = format!("{}/works", self.api_url);

        let mut params = vec![
            ("filter".to_string(), format!("issn:{issn}")),
            ("offset".to_string(), offset.to_string()),
            ("rows".to_string(), rows.to_string()),
        ];

        if let Some(email) = &self.mailto {
            params.push(("mailto".to_string(), email.clone()));
        }

        let response: WorksResponse = self.get(&url, &params).await?;
        Ok(response.message)
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url, ?params, "GET");

        let response = self.client.get(url).query(params).send().await?;
        let response = self.handle_response(response).await?;

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for CrossrefClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossrefClient")
            .field("api_url", &self.api_url)
            .field("has_mailto", &self.has_mailto())
            .field("per_page", &self.per_page)
            .finish()
    }
}
