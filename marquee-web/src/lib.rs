//! Marquee Web - result presenter and browser front end
//!
//! Server-rendered HTML over HTMX. Handlers collect input, the shared
//! [`marquee_search::QueryOrchestrator`] runs the search, and the
//! [`presenter`] decides what the result region shows.

#![warn(clippy::missing_errors_doc)]
#![warn(clippy::too_many_lines)]

pub mod components;
pub mod handlers;
pub mod presenter;
pub mod server;

use marquee_search::SearchError;

// Re-export main types
pub use presenter::{Detail, MovieCard, ResultItem, ResultList, View, render};
pub use server::{AppState, router, run_server};

/// Errors from starting or running the web server.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("Failed to bind {address}: {reason}")]
    Bind { address: String, reason: String },

    #[error("Server error: {reason}")]
    Serve { reason: String },

    #[error(transparent)]
    Search(#[from] SearchError),
}
