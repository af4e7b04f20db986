//! Short link creation, listing, redirect counting and deletion.

use std::sync::Arc;

use crate::domain::entities::{DeletedLink, NewShortLink, ShortLink};
use crate::domain::repositories::{InsertResult, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Attempt budget for finding a free short code.
///
/// At 10 lowercase alphanumeric characters the code space holds 36^10 values,
/// so collisions are vanishingly rare at realistic table sizes; a handful of
/// retries is adequate and exhaustion signals a pathologically full space.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Cap on rows returned by the listing flow.
pub const LIST_LIMIT: i64 = 100;

/// Outcome of a creation request.
///
/// `Existing` is not a failure: submitting a long URL that was already
/// shortened short-circuits to the stored record instead of creating a
/// duplicate. The boundary maps it to HTTP 409 carrying that record.
#[derive(Debug)]
pub enum CreateOutcome {
    Created(ShortLink),
    Existing(ShortLink),
}

/// Service orchestrating all short link flows against the record store.
///
/// Both collaborators are injected so tests can substitute a fake store and
/// a deterministic code source.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generator: Arc<dyn CodeGenerator>,
}

impl LinkService {
    pub fn new(repository: Arc<dyn LinkRepository>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Creates a short link for `raw_url`, or returns the existing record
    /// when the normalized URL was already shortened.
    ///
    /// Exactly one insert happens on the `Created` path; none on the
    /// `Existing` or failure paths.
    ///
    /// Two concurrent submissions of the same long URL may both miss the
    /// dedup lookup and insert twice. That race is accepted: `long_url` is a
    /// soft key with no store constraint, and serializing creations for it
    /// is not worth a lock at this scale.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed or oversized URLs and
    /// [`AppError::Exhausted`] when no free code was found within
    /// [`MAX_CODE_ATTEMPTS`].
    pub async fn create_short_link(&self, raw_url: &str) -> Result<CreateOutcome, AppError> {
        let long_url = normalize_url(raw_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.repository.find_by_long_url(&long_url).await? {
            return Ok(CreateOutcome::Existing(existing));
        }

        let link = self.insert_with_fresh_code(long_url).await?;
        Ok(CreateOutcome::Created(link))
    }

    /// Lists the most recently created links, newest first, capped at
    /// [`LIST_LIMIT`] rows.
    pub async fn list_links(&self) -> Result<Vec<ShortLink>, AppError> {
        self.repository.list_recent(LIST_LIMIT).await
    }

    /// Resolves a short code for redirecting, counting the click.
    ///
    /// The lookup and the counter increment are one atomic store operation;
    /// the counter is never read-modify-written in two steps, so concurrent
    /// redirects cannot lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes; no counter is
    /// touched in that case.
    pub async fn resolve_and_count(&self, code: &str) -> Result<String, AppError> {
        let code = code.to_lowercase();

        self.repository
            .record_click(&code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "The requested short URL does not exist",
                    json!({ "code": code }),
                )
            })
    }

    /// Deletes a link by its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no record has that id.
    pub async fn delete_link(&self, id: i64) -> Result<DeletedLink, AppError> {
        self.repository.delete(id).await?.ok_or_else(|| {
            AppError::not_found("The requested URL does not exist", json!({ "id": id }))
        })
    }

    /// Finds a free code and inserts the new record, retrying on collision.
    ///
    /// Each attempt generates a candidate, checks it against the store and
    /// inserts. The pre-check races with concurrent writers, so the store's
    /// uniqueness constraint is the source of truth: a constraint violation
    /// surfaced by the insert consumes the attempt and loops again instead
    /// of failing the request.
    async fn insert_with_fresh_code(&self, long_url: String) -> Result<ShortLink, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = self.generator.generate();

            if self.repository.find_by_code(&code).await?.is_some() {
                continue;
            }

            let new_link = NewShortLink {
                long_url: long_url.clone(),
                short_code: code,
            };

            match self.repository.insert(new_link).await? {
                InsertResult::Inserted(link) => return Ok(link),
                InsertResult::CodeTaken => continue,
            }
        }

        Err(AppError::exhausted(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }
}
