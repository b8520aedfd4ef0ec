//! Browser front end wired to the stub backend

use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use marquee_web::{AppState, router};
use tower::ServiceExt as _;

use crate::backend;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_web_results_fragment_links() {
    let stub = backend::spawn().await;
    let app = router(AppState::new(Arc::new(stub.orchestrator())));

    let (status, html) = get(app, "/search?provider=serper&query=heist").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"href="L1""#));
    assert!(html.contains(">Visit Website</a>"));
    assert!(html.contains("S1"));
}

#[tokio::test]
async fn test_tab_switch_then_search_uses_new_provider() {
    let stub = backend::spawn().await;
    let orchestrator = Arc::new(stub.orchestrator());
    let app = router(AppState::new(orchestrator.clone()));

    let (status, _) = get(app.clone(), "/tab?provider=imdb").await;
    assert_eq!(status, StatusCode::OK);
    assert!(stub.received().is_empty());

    let (_, html) = get(app, "/search?query=Dune").await;
    assert!(html.contains("IMDb scrape failed"));
    assert_eq!(stub.received()[0].0, "/movies/imdb-scrape");
}
