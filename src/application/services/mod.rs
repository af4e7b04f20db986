//! Application services.

mod link_service;

pub use link_service::{CreateOutcome, LIST_LIMIT, LinkService, MAX_CODE_ATTEMPTS};
