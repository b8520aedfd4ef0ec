//! JSON endpoints

use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe for the front end itself.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "marquee-web",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
