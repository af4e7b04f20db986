//! Handlers for listing and deleting short links.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

use crate::api::dto::link::{DeleteResponse, ListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists stored short links, newest first.
///
/// # Endpoint
///
/// `GET /api/shortUrl`
///
/// # Responses
///
/// - **200 OK** with at most 100 records
/// - **404 Not Found** with an empty `data` array when nothing is stored
pub async fn list_short_urls_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let links = state.link_service.list_links().await?;

    if links.is_empty() {
        let body = ListResponse {
            message: "No URLs found",
            data: vec![],
        };
        return Ok((StatusCode::NOT_FOUND, Json(body)).into_response());
    }

    let body = ListResponse {
        message: "URLs retrieved successfully",
        data: links.into_iter().map(Into::into).collect(),
    };

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Deletes a short link by its store-assigned id.
///
/// # Endpoint
///
/// `DELETE /api/shortUrl/{id}`
///
/// # Responses
///
/// - **200 OK** with `{id, shortCode}` of the removed record
/// - **404 Not Found** for an unknown or non-numeric id
pub async fn delete_short_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    // Ids are store-assigned integers; anything else cannot match a record,
    // and the rejection must still carry the JSON error envelope.
    let id: i64 = match id.parse() {
        Ok(id) => id,
        Err(_) => {
            return Err(AppError::not_found(
                "The requested URL does not exist",
                json!({ "id": id }),
            ));
        }
    };

    let deleted = state.link_service.delete_link(id).await?;

    Ok(Json(DeleteResponse {
        message: "URL deleted successfully",
        data: deleted.into(),
    }))
}
