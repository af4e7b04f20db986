//! Handler for the short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its stored long URL.
///
/// # Endpoint
///
/// `GET /api/shortUrl/{code}`
///
/// The code is case-normalized to lowercase before lookup. The lookup and
/// the click increment are a single atomic store operation; a 404 leaves
/// every counter untouched.
///
/// # Responses
///
/// - **301 Moved Permanently** with the long URL in `Location`
/// - **404 Not Found** for an unknown code
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state.link_service.resolve_and_count(&code).await?;

    debug!(code, target = %long_url, "redirecting");

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, long_url)],
    )
        .into_response())
}
