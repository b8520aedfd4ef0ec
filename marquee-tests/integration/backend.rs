//! Stub movie-finder backend

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use marquee_core::config::ApiConfig;
use marquee_search::{HttpTransport, QueryOrchestrator};
use parking_lot::Mutex;
use serde_json::json;

/// Running stub plus the raw query strings it has received.
pub struct StubBackend {
    pub base_url: String,
    received: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubBackend {
    /// Requests seen so far as `(path, raw query)`.
    pub fn received(&self) -> Vec<(String, String)> {
        self.received.lock().clone()
    }

    pub fn transport(&self) -> HttpTransport {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            ..ApiConfig::default()
        };
        HttpTransport::new(&config).unwrap()
    }

    pub fn orchestrator(&self) -> QueryOrchestrator {
        QueryOrchestrator::new(Arc::new(self.transport()))
    }
}

type Received = Arc<Mutex<Vec<(String, String)>>>;

fn record(received: &Received, path: &str, raw: Option<String>) {
    received.lock().push((path.to_string(), raw.unwrap_or_default()));
}

async fn omdb(
    State(received): State<Received>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    record(&received, "/movies/omdb", raw);
    match params.get("title").map(String::as_str) {
        Some("Inception") => Json(json!({
            "Title": "Inception",
            "Year": "2010",
            "imdbRating": "8.8",
            "Poster": "N/A",
        }))
        .into_response(),
        Some("Garbled") => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"detail": "Movie not found"}))).into_response(),
    }
}

async fn serper(State(received): State<Received>, RawQuery(raw): RawQuery) -> Json<serde_json::Value> {
    record(&received, "/search/serper", raw);
    Json(json!({
        "results": [
            {"title": "T1", "snippet": "S1", "link": "L1"},
        ]
    }))
}

async fn imdb_scrape(State(received): State<Received>, RawQuery(raw): RawQuery) -> StatusCode {
    record(&received, "/movies/imdb-scrape", raw);
    StatusCode::NOT_FOUND
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "message": "Movie Finder API is running"}))
}

/// Starts the stub on `127.0.0.1:0` and returns once it is accepting.
pub async fn spawn() -> StubBackend {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/movies/omdb", get(omdb))
        .route("/search/serper", get(serper))
        .route("/movies/imdb-scrape", get(imdb_scrape))
        .route("/health", get(health))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        base_url: format!("http://{address}"),
        received,
    }
}

/// Base URL of a loopback port that nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}
