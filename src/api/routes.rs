//! API route configuration.

use crate::api::handlers::{
    create_short_url_handler, delete_short_url_handler, list_short_urls_handler, redirect_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorturl`        - Create a short URL (stricter rate limit)
/// - `GET    /shortUrl`        - List stored URLs, newest first
/// - `GET    /shortUrl/{code}` - Redirect to the long URL, counting the click
/// - `DELETE /shortUrl/{id}`   - Delete a record by id
///
/// The redirect and delete endpoints share a path template; axum dispatches
/// on the method and each handler parses the parameter it needs.
pub fn api_routes() -> Router<AppState> {
    let create = Router::new()
        .route("/shorturl", post(create_short_url_handler))
        .layer(rate_limit::create_layer());

    Router::new()
        .route("/shortUrl", get(list_short_urls_handler))
        .route(
            "/shortUrl/{code}",
            get(redirect_handler).delete(delete_short_url_handler),
        )
        .merge(create)
}
