//! Fallback handler for unmatched routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers any unmatched route with the standard JSON error envelope.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(
        "The requested route does not exist",
        json!({ "path": uri.path() }),
    )
}
