//! Health check handler
//!
//! Liveness probe endpoint.

use axum::Json;
use ideabin_service::dto::HealthResponse;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
