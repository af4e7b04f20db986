//! Repository trait for short link data access.

use crate::domain::entities::{DeletedLink, NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of an insert attempt.
///
/// `CodeTaken` is not an error: it signals that a concurrent writer claimed
/// the candidate code between the caller's existence check and the insert,
/// and the caller should generate a new candidate.
#[derive(Debug)]
pub enum InsertResult {
    Inserted(ShortLink),
    CodeTaken,
}

/// Storage interface for short links.
///
/// The store is the single shared mutable resource. The only atomicity it
/// must provide is the uniqueness constraint on `short_code` and the
/// single-statement click increment; everything else is plain point lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - In-memory fake in `tests/common` for handler tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// Returns [`InsertResult::CodeTaken`] when the store's uniqueness
    /// constraint on `short_code` rejects the row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on any other database error.
    async fn insert(&self, new_link: NewShortLink) -> Result<InsertResult, AppError>;

    /// Point lookup by short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Point lookup by exact long URL, used for soft deduplication.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>, AppError>;

    /// Lists links newest first, capped at `limit` rows.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortLink>, AppError>;

    /// Atomically increments the click counter for `code` and returns the
    /// stored long URL, in a single store round trip.
    ///
    /// Returns `Ok(None)` when the code is unknown; no counter is touched.
    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Deletes a link by its store-assigned id.
    ///
    /// Returns the identifying fields of the removed row, or `Ok(None)` when
    /// no row matched.
    async fn delete(&self, id: i64) -> Result<Option<DeletedLink>, AppError>;
}
