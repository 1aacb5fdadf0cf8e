//! HTTP client for the Kasplex token list.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tickgen_types::TokenPage;
use tracing::{debug, info};

use crate::PageSource;
use crate::url::{BASE_URL, tokenlist_url};

/// Configuration for the Kasplex client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without the token list path.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("tickgen/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the whole-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Errors that can occur while fetching a page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// Body was not a token list page.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Page URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// HTTP client for the Kasplex API.
#[derive(Debug, Clone)]
pub struct KasplexClient {
    client: Client,
    config: ClientConfig,
}

impl KasplexClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetches a single page, starting after `cursor` if one is given.
    ///
    /// No retries are attempted.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// body that does not decode as a [`TokenPage`].
    pub async fn get_page(&self, cursor: Option<&str>) -> Result<TokenPage, FetchError> {
        let url = tokenlist_url(&self.config.base_url, cursor)?;
        info!(%url, "Fetching token list page");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ServerError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Received token list page");
        decode_page(&body)
    }
}

#[async_trait]
impl PageSource for KasplexClient {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<TokenPage, FetchError> {
        self.get_page(cursor).await
    }
}

/// Decodes a token list response body.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not JSON, lacks `result`,
/// or contains a record without a `tick`.
pub fn decode_page(body: &[u8]) -> Result<TokenPage, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
