//! Liveness probe for the movie-finder backend.

use serde::Deserialize;

use crate::errors::SearchError;
use crate::request::RequestDescriptor;
use crate::transport::SearchTransport;

/// Body of the backend's `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Asks the backend whether it is up.
///
/// This is independent of the orchestrator and never changes request state.
///
/// # Errors
/// - `SearchError::Transport` / `SearchError::HttpStatus` - Backend unreachable or unhealthy
/// - `SearchError::Parse` - Body is not a health document
pub async fn check_health(transport: &dyn SearchTransport) -> Result<HealthStatus, SearchError> {
    let body = transport.fetch(&RequestDescriptor::new("/health")).await?;
    Ok(serde_json::from_slice(&body)?)
}
