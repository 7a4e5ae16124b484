//! Fetch layer for docscrape
//!
//! Pages are retrieved through the [`Fetcher`] trait. Two backends implement
//! it with the same contract:
//! - [`HttpFetcher`]: direct HTTP requests
//! - [`ProxyFetcher`]: a third-party rendering proxy API
//!
//! The orchestrator only ever sees `dyn Fetcher`; backend selection happens
//! once, in [`build_fetcher`].

mod http;
mod proxy;

pub use http::{build_http_client, HttpFetcher};
pub use proxy::{ProxyFetcher, PROXY_HEADER_PREFIX};

use crate::config::FetchConfig;
use crate::ConfigError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP {status_code} for {url}")]
    Status { url: String, status_code: u16 },

    #[error("Invalid header '{name}'")]
    InvalidHeader { name: String },
}

impl FetchError {
    /// Classifies a transport error from reqwest
    pub(crate) fn from_reqwest(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else if error.is_connect() {
            Self::Connect {
                url: url.to_string(),
                source: error,
            }
        } else {
            Self::Http {
                url: url.to_string(),
                source: error,
            }
        }
    }
}

/// Raw response of a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code of the final response
    pub status_code: u16,
    /// Response body as text
    pub content: String,
}

/// Retrieves the markup of a page
///
/// Implementations return `Err` for transport failures and for non-2xx
/// responses, so a returned [`FetchResponse`] always holds a usable page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url`, sending `headers` in addition to the backend's own
    async fn fetch(&self, url: &str, headers: Option<&HeaderMap>)
        -> Result<FetchResponse, FetchError>;
}

/// Builds a header map from configured name/value pairs
pub fn build_headers<'a, I>(pairs: I) -> Result<HeaderMap, FetchError>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| FetchError::InvalidHeader { name: name.clone() })?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| FetchError::InvalidHeader { name: name.clone() })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

/// Selects and builds the fetch backend
///
/// # Arguments
///
/// * `config` - Fetch configuration
/// * `use_proxy` - Use the proxy backend instead of direct HTTP
/// * `api_key` - Proxy credential; required when `use_proxy` is set
///
/// # Returns
///
/// * `Ok(Box<dyn Fetcher>)` - The selected backend
/// * `Err(ConfigError::MissingCredential)` - Proxy requested without a key
pub fn build_fetcher(
    config: &FetchConfig,
    use_proxy: bool,
    api_key: Option<&str>,
) -> Result<Box<dyn Fetcher>, ConfigError> {
    let client = build_http_client(config)
        .map_err(|e| ConfigError::Validation(format!("Failed to build HTTP client: {}", e)))?;

    if use_proxy {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingCredential)?;
        tracing::info!("Using proxy backend at {}", config.proxy_endpoint);
        Ok(Box::new(ProxyFetcher::new(
            client,
            &config.proxy_endpoint,
            api_key,
        )))
    } else {
        tracing::info!("Using direct HTTP backend");
        Ok(Box::new(HttpFetcher::new(client)))
    }
}
