//! Integration tests for Marquee
//!
//! The orchestrator runs over the real reqwest transport against a stub
//! movie-finder backend served by axum on an ephemeral loopback port.

#[path = "integration/backend.rs"]
mod backend;

#[path = "integration/search_flow.rs"]
mod search_flow;

#[path = "integration/web_frontend.rs"]
mod web_frontend;
