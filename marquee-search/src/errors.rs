//! Error types for provider dispatch.

use thiserror::Error;

/// Errors that can occur while building, sending or decoding a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Year filter outside the accepted range.
    #[error("Year {year} is outside {min}..={max}")]
    InvalidYear {
        /// The rejected year
        year: i64,
        /// Earliest accepted year
        min: u16,
        /// Latest accepted year
        max: u16,
    },

    /// Year input that is not a number at all.
    #[error("Year '{input}' is not a number")]
    MalformedYear {
        /// The raw input that failed to parse
        input: String,
    },

    /// The request never produced an HTTP response.
    #[error("Request to {path} failed: {reason}")]
    Transport {
        /// Endpoint path that was requested
        path: String,
        /// Underlying transport failure
        reason: String,
    },

    /// The backend answered with a non-2xx status.
    #[error("Request to {path} returned HTTP {status}")]
    HttpStatus {
        /// Endpoint path that was requested
        path: String,
        /// Status code returned by the backend
        status: u16,
    },

    /// Response body did not match the expected shape.
    #[error("{reason}")]
    Parse {
        /// Decoder message
        reason: String,
    },

    /// Configured base URL could not be used to build request URLs.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The configured base URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// HTTP client could not be constructed from the configuration.
    #[error("HTTP client setup failed: {reason}")]
    ClientSetup {
        /// Builder failure
        reason: String,
    },

    /// Provider identifier not present in the registry.
    #[error("Unknown provider '{name}'. Valid options are: omdb, serper, imdb")]
    UnknownProvider {
        /// The identifier that was given
        name: String,
    },
}

impl SearchError {
    /// True for failures that happened on the wire rather than in decoding.
    ///
    /// These are reported with the provider's fixed message instead of
    /// their own detail.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SearchError::Transport { .. } | SearchError::HttpStatus { .. }
        )
    }

    /// True for input problems caught before any request is made.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidYear { .. }
                | SearchError::MalformedYear { .. }
                | SearchError::UnknownProvider { .. }
        )
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        SearchError::Parse {
            reason: error.to_string(),
        }
    }
}
