//! CORS configuration switched by operating mode.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

use crate::config::{AppEnv, Config};

/// Origins always allowed in development (local SPA dev servers).
const DEV_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:5173"];

/// Builds the CORS layer from the configured allowlist.
///
/// Production allows only the origins named in `CORS_ALLOWED_ORIGINS`;
/// development additionally allows the usual local frontend dev servers.
pub fn layer(config: &Config) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if config.app_env == AppEnv::Development {
        origins.extend(DEV_ORIGINS.iter().filter_map(|origin| origin.parse().ok()));
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
