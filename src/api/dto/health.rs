//! DTO for the health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check status payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}
