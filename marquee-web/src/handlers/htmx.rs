//! HTMX fragment handlers for searching and switching tabs
//!
//! These act as the browser's input collector: form fields are parsed and
//! validated here, and only well-formed queries reach the orchestrator.

use axum::extract::{Query as QueryParams, State};
use axum::http::StatusCode;
use axum::response::Html;
use marquee_search::{Provider, Query, SearchError};
use serde::Deserialize;

use crate::components::results::error;
use crate::components::{controls, result_region};
use crate::presenter::render;
use crate::server::AppState;

/// Fields submitted by the search form.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub provider: Option<String>,
    #[serde(default)]
    pub query: String,
    /// Raw year field; empty when the user left it blank
    pub year: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TabParams {
    pub provider: String,
}

/// Submits a search and returns the rendered result region.
///
/// Unknown providers and invalid years are answered with `400` and an error
/// fragment without touching the orchestrator. A blank query leaves the
/// state untouched and re-renders it, whatever the year field holds.
pub async fn search(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SearchParams>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let provider = match params.provider.as_deref() {
        Some(id) => id.parse::<Provider>().map_err(input_error)?,
        None => state.orchestrator.active_provider(),
    };
    let query = Query::from_input(&params.query, params.year.as_deref(), provider)
        .map_err(input_error)?;

    let outcome = match state.orchestrator.submit(provider, &query).await {
        Some(terminal) => terminal,
        None => state.orchestrator.state(),
    };

    let active = state.orchestrator.active_provider();
    Ok(Html(result_region(&render(&outcome, active))))
}

/// Switches the active provider and returns the controls for it.
///
/// No request is sent and the current result is left as it is.
pub async fn switch_tab(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<TabParams>,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let provider = params.provider.parse::<Provider>().map_err(input_error)?;
    state.orchestrator.select_provider(provider);
    Ok(Html(controls(provider)))
}

/// Error fragment for input that could not be turned into a query.
fn input_error(err: SearchError) -> (StatusCode, Html<String>) {
    let status = if err.is_validation() {
        tracing::debug!("Rejected search input: {}", err);
        StatusCode::BAD_REQUEST
    } else {
        tracing::warn!("Search input handling failed: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Html(error(&err.to_string())))
}
