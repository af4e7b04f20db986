//! Handler for the health check endpoint.

use axum::Json;
use chrono::Utc;

use crate::api::dto::health::HealthResponse;

/// Returns service liveness status.
///
/// # Endpoint
///
/// `GET /health-check`
///
/// Always answers 200; a process that can serve this route is considered up.
pub async fn health_check_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "TinyLinker service is up and running",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}
