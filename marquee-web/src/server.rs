//! HTMX + Tailwind front end for the query orchestrator
//!
//! One orchestrator is shared by every browser tab, so the server behaves as
//! a single search session.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use marquee_core::config::MarqueeConfig;
use marquee_search::{HttpTransport, QueryOrchestrator};

use crate::WebError;
use crate::handlers::{health, index_page, search, switch_tab};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<QueryOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Arc<QueryOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

/// Builds the router with all routes attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        // HTMX partial update endpoints
        .route("/search", get(search))
        .route("/tab", get(switch_tab))
        .route("/health", get(health))
        .with_state(state)
}

/// Serves the front end until the process is stopped.
///
/// # Errors
/// - `WebError::Search` - HTTP client for the backend could not be created
/// - `WebError::Bind` - Listen address is unavailable
/// - `WebError::Serve` - Server stopped with an I/O error
pub async fn run_server(config: &MarqueeConfig) -> Result<(), WebError> {
    let transport = HttpTransport::new(&config.api)?;
    let orchestrator = Arc::new(QueryOrchestrator::new(Arc::new(transport)));
    let app = router(AppState::new(orchestrator));

    let address = config.web_bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| WebError::Bind {
            address: address.clone(),
            reason: e.to_string(),
        })?;

    tracing::info!(
        "Marquee running on http://{} (backend {})",
        address,
        config.api.base_url
    );
    axum::serve(listener, app)
        .await
        .map_err(|e| WebError::Serve {
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use axum::body::{self, Body};
    use axum::http::{Request, StatusCode};
    use marquee_search::mock::{MockResponse, MockTransport};
    use marquee_search::{Provider, RequestState};
    use serde_json::json;
    use tower::ServiceExt as _;

    use super::*;

    const BODY_LIMIT: usize = 1024 * 1024;

    fn app_with(transport: MockTransport) -> (Router, Arc<MockTransport>, Arc<QueryOrchestrator>) {
        let transport = Arc::new(transport);
        let orchestrator = Arc::new(QueryOrchestrator::new(transport.clone()));
        (router(AppState::new(orchestrator.clone())), transport, orchestrator)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_renders_hero_and_default_tab() {
        let (app, transport, _) = app_with(MockTransport::new());
        let (status, html) = get(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Smart Movie Finder"));
        assert!(html.contains(r#"name="provider" value="omdb""#));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_search_renders_movie_card() {
        let transport = MockTransport::new().with(
            "/movies/omdb",
            MockResponse::json(&json!({"Title": "Inception", "Year": "2010", "imdbRating": "8.8", "Poster": "N/A"})),
        );
        let (app, transport, _) = app_with(transport);

        let (status, html) = get(app, "/search?provider=omdb&query=Inception&year=2010").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Inception"));
        assert!(html.contains("8.8/10"));
        assert!(!html.contains("<img"));
        assert_eq!(transport.requests()[0].param("year"), Some("2010"));
    }

    #[tokio::test]
    async fn test_search_failure_shows_fixed_message() {
        let (app, _, orchestrator) = app_with(MockTransport::new());
        let (status, html) = get(app, "/search?provider=imdb&query=Dune").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("IMDb scrape failed"));
        assert_eq!(
            orchestrator.state(),
            RequestState::Failed("IMDb scrape failed".to_string())
        );
    }

    #[tokio::test]
    async fn test_year_ignored_for_web_search() {
        let transport = MockTransport::new().with(
            "/search/serper",
            MockResponse::json(&json!({"results": []})),
        );
        let (app, transport, _) = app_with(transport);

        let (status, html) = get(app, "/search?provider=serper&query=heist&year=abc").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Search Results"));
        assert_eq!(transport.requests()[0].param("year"), None);
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_without_request() {
        let (app, transport, orchestrator) = app_with(MockTransport::new());

        let (status, _) = get(app.clone(), "/search?provider=omdb&query=Heat&year=1850").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, html) = get(app, "/search?provider=netflix&query=Heat").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("netflix"));

        assert_eq!(transport.request_count(), 0);
        assert_eq!(orchestrator.state(), RequestState::Idle);
    }

    #[tokio::test]
    async fn test_blank_query_sends_nothing() {
        let (app, transport, _) = app_with(MockTransport::new());
        let (status, _) = get(app, "/search?provider=omdb&query=%20%20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_query_ignores_bad_year() {
        let (app, transport, orchestrator) = app_with(MockTransport::new());
        let (status, html) = get(app, "/search?provider=omdb&query=%20%20&year=1850").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("1850"));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(orchestrator.state(), RequestState::Idle);
    }

    #[tokio::test]
    async fn test_tab_switch_selects_provider_without_request() {
        let (app, transport, orchestrator) = app_with(MockTransport::new());
        let (status, html) = get(app, "/tab?provider=web").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"value="serper""#));
        assert!(!html.contains(r#"name="year""#));
        assert_eq!(orchestrator.active_provider(), Provider::WebSearch);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _, _) = app_with(MockTransport::new());
        let (status, body) = get(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "ok");
    }
}
