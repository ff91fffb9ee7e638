//! HTTP client for the paginated character endpoint.
//!
//! One GET per page: `{base_url}?page={n}`. No retries, no caching. The
//! caller decides what a failure means.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;

use super::types::CharacterPage;

/// Errors that can occur while fetching a page.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Client could not be built (bad TLS backend, invalid settings).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not the expected JSON envelope.
    Parse(String),
}

impl FetchError {
    /// The API answers 404 for any page past the last one.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, FetchError::Api { status: 404, .. })
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "client config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can hand out pages of characters.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches a single 1-based page.
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage, FetchError>;
}

/// Client for `https://rickandmortyapi.com/api/character` (or a compatible mirror).
pub struct RickAndMortyClient {
    base_url: String,
    client: reqwest::Client,
}

impl RickAndMortyClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl CharacterSource for RickAndMortyClient {
    fn name(&self) -> &str {
        "rickandmorty"
    }

    async fn fetch_page(&self, page: u32) -> Result<CharacterPage, FetchError> {
        info!("GET {}?page={}", self.base_url, page);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Page {} response status: {}", page, status);

        if !status.is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            if status == StatusCode::NOT_FOUND {
                debug!("Page {} not found: {}", page, err_body);
            } else {
                warn!("Character API error: {} - {}", status, err_body);
            }
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let parsed: CharacterPage =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        info!(
            "Page {} returned {} characters (next={:?})",
            page,
            parsed.results.len(),
            parsed.info.as_ref().and_then(|i| i.next.as_deref())
        );
        Ok(parsed)
    }
}
