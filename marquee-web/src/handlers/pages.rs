//! Full-page handlers

use axum::extract::State;
use axum::response::Html;

use crate::components::{controls, hero, render_page, result_region};
use crate::presenter::render;
use crate::server::AppState;

/// Renders the landing page with the active tab and the last known result.
pub async fn index_page(State(state): State<AppState>) -> Html<String> {
    let active = state.orchestrator.active_provider();
    let view = render(&state.orchestrator.state(), active);

    let content = format!(
        r#"{}
        {}
        <div id="loading" class="htmx-indicator">{}</div>
        {}"#,
        hero(),
        controls(active),
        crate::components::results::loading(),
        result_region(&view)
    );

    render_page("Movie Finder", &content)
}
