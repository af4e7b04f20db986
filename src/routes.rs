//! Top-level router: API routes, health check, middleware stack and static
//! SPA serving in production mode.

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api;
use crate::api::handlers::{health_check_handler, not_found_handler};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::config::{AppEnv, Config};
use crate::state::AppState;

/// Constructs the application router.
///
/// # Route Structure
///
/// - `GET /health-check` - liveness probe (public, unlimited)
/// - `/api/*`            - REST API (rate limited)
/// - `/*`                - SPA static files with index fallback in
///   production; a JSON 404 envelope in development
///
/// # Middleware
///
/// Request tracing, per-IP rate limiting, CORS allowlist switched by
/// operating mode, response compression, baseline security headers and
/// trailing-slash normalization.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let api_router = api::routes::api_routes().layer(rate_limit::layer());

    let mut router = Router::new()
        .route("/health-check", get(health_check_handler))
        .nest("/api", api_router)
        .with_state(state);

    if config.app_env == AppEnv::Production {
        let index = format!("{}/index.html", config.static_dir.trim_end_matches('/'));
        let spa = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));
        router = router.fallback_service(spa);
    } else {
        // Without the SPA bundle, unmatched routes still answer with the
        // JSON error envelope instead of axum's empty 404.
        router = router.fallback(not_found_handler);
    }

    let router = router
        .layer(cors::layer(config))
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
