//! Direct HTTP backend

use crate::config::FetchConfig;
use crate::fetch::{FetchError, FetchResponse, Fetcher};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use docscrape::config::FetchConfig;
/// use docscrape::fetch::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages with plain GET requests
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        headers: Option<&HeaderMap>,
    ) -> Result<FetchResponse, FetchError> {
        let mut request = self.client.get(url);
        if let Some(headers) = headers {
            request = request.headers(headers.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        read_response(url, response).await
    }
}

/// Turns a response into a [`FetchResponse`], rejecting non-2xx statuses
pub(crate) async fn read_response(
    url: &str,
    response: reqwest::Response,
) -> Result<FetchResponse, FetchError> {
    let status = response.status();

    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status_code: status.as_u16(),
        });
    }

    let content = response
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(url, e))?;

    tracing::debug!("Fetched {} ({} bytes, HTTP {})", url, content.len(), status);

    Ok(FetchResponse {
        status_code: status.as_u16(),
        content,
    })
}
