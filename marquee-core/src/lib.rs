//! Marquee Core - configuration, tracing and shared errors
//!
//! Everything the search client, the web front end and the CLI agree on
//! lives here: where the backend is, how logging is wired, and the
//! top-level error type that subsystem errors roll up into.

pub mod config;
pub mod tracing_setup;

pub use config::{ApiConfig, MarqueeConfig, WebConfig};
pub use tracing_setup::{CliLogLevel, init_tracing};

/// Core errors that can bubble up from any Marquee subsystem.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Tracing setup failed: {reason}")]
    Tracing { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            MarqueeError::Tracing { .. } => "Logging could not be initialized".to_string(),
            MarqueeError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error was caused by user-supplied settings.
    pub fn is_user_error(&self) -> bool {
        matches!(self, MarqueeError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
