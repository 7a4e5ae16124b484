//! Rendering proxy backend
//!
//! Requests go to the proxy endpoint with the target URL and the API key as
//! query parameters. The proxy renders the page and returns its markup.

use crate::fetch::http::read_response;
use crate::fetch::{FetchError, FetchResponse, Fetcher};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName};
use reqwest::Client;

/// Prefix marking headers the proxy should forward to the target site
pub const PROXY_HEADER_PREFIX: &str = "ant-";

/// Fetches pages through a third-party rendering proxy
#[derive(Clone)]
pub struct ProxyFetcher {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for ProxyFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyFetcher")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ProxyFetcher {
    pub fn new(client: Client, endpoint: &str, api_key: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

/// Renames headers so the proxy forwards them instead of consuming them
fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut forwarded = HeaderMap::new();
    for (name, value) in headers {
        let prefixed = format!("{}{}", PROXY_HEADER_PREFIX, name.as_str());
        if let Ok(prefixed) = HeaderName::from_bytes(prefixed.as_bytes()) {
            forwarded.append(prefixed, value.clone());
        }
    }
    forwarded
}

#[async_trait]
impl Fetcher for ProxyFetcher {
    async fn fetch(
        &self,
        url: &str,
        headers: Option<&HeaderMap>,
    ) -> Result<FetchResponse, FetchError> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url), ("x-api-key", self.api_key.as_str())]);
        if let Some(headers) = headers {
            request = request.headers(forwarded_headers(headers));
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;
        read_response(url, response).await
    }
}
