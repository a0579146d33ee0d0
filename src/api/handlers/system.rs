//! System endpoints: health check, current game state, OpenAPI document.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::ApiDoc;
use crate::app_state::AppState;
use crate::domain::GameSnapshot;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// `GET /state` — Current lobby and round state.
#[utoipa::path(
    get,
    path = "/state",
    tag = "System",
    summary = "Current game state",
    description = "Returns the called numbers, lobby size and round status, whether or not a round is running.",
    responses(
        (status = 200, description = "Game snapshot", body = GameSnapshot),
    )
)]
pub async fn state_handler(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.game_service.snapshot().await)
}

/// `GET /api-docs/openapi.json` — OpenAPI document for the REST surface.
pub async fn openapi_handler() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/state", get(state_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
}
