//! Orchestrator over real HTTP

use std::sync::Arc;

use marquee_core::config::ApiConfig;
use marquee_search::{
    HttpTransport, Provider, Query, QueryOrchestrator, RequestState, check_health,
};
use marquee_web::components::results::movie_card;
use marquee_web::presenter::{View, render};

use crate::backend;

#[tokio::test]
async fn test_structured_metadata_card_without_poster() {
    let stub = backend::spawn().await;
    let orchestrator = stub.orchestrator();

    let state = orchestrator
        .submit(Provider::StructuredMetadata, &Query::new("Inception", Some(2010)))
        .await
        .unwrap();

    let View::Movie(card) = render(&state, Provider::StructuredMetadata) else {
        panic!("expected a movie card, got {state:?}");
    };
    assert_eq!(card.title, "Inception");
    assert_eq!(card.detail("Year"), Some("2010"));
    assert_eq!(card.detail("IMDb Rating"), Some("8.8/10"));
    assert!(!movie_card(&card).contains("<img"));

    assert_eq!(
        stub.received(),
        vec![("/movies/omdb".to_string(), "title=Inception&year=2010".to_string())]
    );
}

#[tokio::test]
async fn test_web_search_sends_fixed_count_and_no_year() {
    let stub = backend::spawn().await;
    let orchestrator = stub.orchestrator();

    let state = orchestrator
        .submit(Provider::WebSearch, &Query::new("sci-fi & fantasy", Some(2001)))
        .await
        .unwrap();

    let View::Results(list) = render(&state, Provider::WebSearch) else {
        panic!("expected a result list, got {state:?}");
    };
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].title, "T1");
    assert_eq!(list.items[0].snippet, "S1");
    assert_eq!(list.items[0].link, "L1");

    let (path, raw) = stub.received().remove(0);
    assert_eq!(path, "/search/serper");
    assert_eq!(raw, "query=sci-fi+%26+fantasy&num_results=10");
}

#[tokio::test]
async fn test_scrape_not_found_uses_fixed_message() {
    let stub = backend::spawn().await;
    let orchestrator = stub.orchestrator();

    let state = orchestrator
        .submit(Provider::ScrapedMetadata, &Query::text("Dune"))
        .await
        .unwrap();

    assert_eq!(state, RequestState::Failed("IMDb scrape failed".to_string()));
    assert_eq!(orchestrator.state(), state);
}

#[tokio::test]
async fn test_unparseable_body_keeps_decoder_message() {
    let stub = backend::spawn().await;
    let orchestrator = stub.orchestrator();

    let state = orchestrator
        .submit(Provider::StructuredMetadata, &Query::text("Garbled"))
        .await
        .unwrap();

    match state {
        RequestState::Failed(message) => {
            assert!(!message.is_empty());
            assert_ne!(message, "Movie not found");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_uses_fixed_message() {
    let config = ApiConfig {
        base_url: backend::closed_port_url().await,
        ..ApiConfig::default()
    };
    let orchestrator = QueryOrchestrator::new(Arc::new(HttpTransport::new(&config).unwrap()));

    let state = orchestrator
        .submit(Provider::WebSearch, &Query::text("heist"))
        .await
        .unwrap();
    assert_eq!(state, RequestState::Failed("Search failed".to_string()));
}

#[tokio::test]
async fn test_blank_query_never_reaches_backend() {
    let stub = backend::spawn().await;
    let orchestrator = stub.orchestrator();

    assert!(orchestrator
        .submit(Provider::StructuredMetadata, &Query::text("   "))
        .await
        .is_none());
    assert_eq!(orchestrator.state(), RequestState::Idle);
    assert!(stub.received().is_empty());
}

#[tokio::test]
async fn test_backend_health() {
    let stub = backend::spawn().await;
    let status = check_health(&stub.transport()).await.unwrap();

    assert!(status.is_ok());
    assert_eq!(status.message.as_deref(), Some("Movie Finder API is running"));
}
