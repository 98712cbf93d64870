//! Health check handlers
//!
//! Endpoints for the landing message and liveness/readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use store_service::{HealthResponse, MessageResponse, ReadinessResponse};

use crate::state::AppState;

/// Landing endpoint
///
/// GET /
pub async fn root(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Welcome to {}",
        state.config().app.name
    )))
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness check with database health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = state.service_context().pool().acquire().await.is_ok();

    if db_healthy {
        (StatusCode::OK, Json(ReadinessResponse::ready()))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(ReadinessResponse::degraded()))
    }
}
