//! Handler for the shorten endpoint.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::CreateOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a submitted long URL.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// ```json
/// { "fullUrl": "example.com/some/page" }
/// ```
///
/// # Responses
///
/// - **201 Created** with the new record when the URL was not seen before
/// - **409 Conflict** with the existing record when the (normalized) URL was
///   already shortened; no second record is created
/// - **400 Bad Request** for malformed or oversized URLs
/// - **500 Internal Server Error** when the code retry budget is exhausted
///   or the store fails
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let response = match state.link_service.create_short_link(&payload.full_url).await? {
        CreateOutcome::Created(link) => (
            StatusCode::CREATED,
            Json(ShortenResponse {
                message: "URL shortened successfully",
                data: link.into(),
            }),
        ),
        CreateOutcome::Existing(link) => (
            StatusCode::CONFLICT,
            Json(ShortenResponse {
                message: "URL already exists",
                data: link.into(),
            }),
        ),
    };

    Ok(response.into_response())
}
