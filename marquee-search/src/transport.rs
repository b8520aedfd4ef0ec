//! Network boundary between the orchestrator and the backend.

use async_trait::async_trait;
use marquee_core::config::ApiConfig;

use crate::errors::SearchError;
use crate::request::RequestDescriptor;

/// Performs a single GET for a request descriptor.
///
/// Implementations make exactly one attempt per call. They never retry and
/// never cache.
#[async_trait]
pub trait SearchTransport: Send + Sync + std::fmt::Debug {
    /// Fetches the body of a 2xx response.
    ///
    /// # Errors
    /// - `SearchError::Transport` - No response was received
    /// - `SearchError::HttpStatus` - Response status was not 2xx
    async fn fetch(&self, request: &RequestDescriptor) -> Result<Vec<u8>, SearchError>;
}

/// reqwest-backed transport talking to the movie-finder backend.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport for the configured backend.
    ///
    /// No timeout is set unless the configuration asks for one.
    ///
    /// # Errors
    /// - `SearchError::InvalidBaseUrl` - Base URL is not an absolute http(s) URL
    /// - `SearchError::ClientSetup` - reqwest client could not be built
    pub fn new(config: &ApiConfig) -> Result<Self, SearchError> {
        RequestDescriptor::new("/").url(&config.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| SearchError::ClientSetup {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SearchTransport for HttpTransport {
    async fn fetch(&self, request: &RequestDescriptor) -> Result<Vec<u8>, SearchError> {
        let url = request.url(&self.base_url)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::debug!("Request to {} failed: {}", request.path, e);
            SearchError::Transport {
                path: request.path.to_string(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} returned status {}", request.path, status);
            return Err(SearchError::HttpStatus {
                path: request.path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| SearchError::Transport {
            path: request.path.to_string(),
            reason: format!("reading body failed: {e}"),
        })?;

        Ok(body.to_vec())
    }
}
