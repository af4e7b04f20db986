//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// Handler-visible application state.
///
/// The service (and through it the record store handle) is passed explicitly
/// rather than living in a module-level singleton, so tests can substitute a
/// fake store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}
