//! Marquee Search - provider dispatch and response normalization
//!
//! Routes a free-text movie query to one of three providers behind the
//! movie-finder backend, tracks the request lifecycle, and hands back the
//! provider-shaped response as a tagged [`SearchPayload`].

#![deny(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]

pub mod errors;
pub mod health;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod orchestrator;
pub mod providers;
pub mod query;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types
pub use errors::SearchError;
pub use health::{HealthStatus, check_health};
pub use orchestrator::{QueryOrchestrator, RequestState};
pub use providers::{Provider, ProviderInfo, providers};
pub use query::Query;
pub use request::{RequestDescriptor, build};
pub use transport::{HttpTransport, SearchTransport};
pub use types::{
    ABSENT_MARKER, ScrapedMetadataResult, ScrapedMovie, SearchPayload, StructuredMetadataResult,
    WebSearchItem, WebSearchResult, available,
};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
