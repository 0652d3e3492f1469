//! HTTP API: the graph retrieval endpoint
//!
//! `GET /graph` rebuilds the vault graph, reconciles it with the
//! persisted snapshot, and returns `{"graph": ..., "updated": bool}`.
//! Rebuilding per request is fine at personal-vault scale.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use vaultgraph_core::{snapshot, RefreshOutcome, VaultConfig};

pub fn create_router(config: VaultConfig) -> Router {
    Router::new()
        .route("/graph", get(get_graph))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(config))
}

/// Log an internal error and return a sanitized response to the
/// client. The full error is logged server-side; clients only see a
/// generic message.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn get_graph(
    State(config): State<Arc<VaultConfig>>,
) -> Result<Json<RefreshOutcome>, (StatusCode, String)> {
    // The build is synchronous and blocking; keep it off the runtime
    let outcome = tokio::task::spawn_blocking(move || snapshot::refresh(&config))
        .await
        .map_err(internal_error)?
        .map_err(internal_error)?;

    Ok(Json(outcome))
}
