//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{DeletedLink, NewShortLink, ShortLink};
use crate::domain::repositories::{InsertResult, LinkRepository};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

const LINK_COLUMNS: &str = "id, long_url, short_code, clicks, created_at, updated_at";

/// Row shape shared by all `short_links` queries.
#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    long_url: String,
    short_code: String,
    clicks: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(
            row.id,
            row.long_url,
            row.short_code,
            row.clicks,
            row.created_at,
            row.updated_at,
        )
    }
}

#[derive(sqlx::FromRow)]
struct DeletedRow {
    id: i64,
    short_code: String,
}

/// PostgreSQL repository for short link storage.
///
/// Uses runtime-bound prepared statements; the uniqueness of `short_code`
/// and the atomicity of the click increment are delegated entirely to the
/// database.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<InsertResult, AppError> {
        let sql = format!(
            "INSERT INTO short_links (long_url, short_code) VALUES ($1, $2) \
             RETURNING {LINK_COLUMNS}"
        );

        let result = sqlx::query_as::<_, ShortLinkRow>(&sql)
            .bind(&new_link.long_url)
            .bind(&new_link.short_code)
            .fetch_one(self.pool.as_ref())
            .await;

        match result {
            Ok(row) => Ok(InsertResult::Inserted(row.into())),
            // The check-then-insert race lost; the caller retries with a
            // fresh candidate.
            Err(e) if is_unique_violation_on_code(&e) => Ok(InsertResult::CodeTaken),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM short_links WHERE short_code = $1");

        let row = sqlx::query_as::<_, ShortLinkRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<ShortLink>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM short_links WHERE long_url = $1 LIMIT 1");

        let row = sqlx::query_as::<_, ShortLinkRow>(&sql)
            .bind(long_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let sql = format!(
            "SELECT {LINK_COLUMNS} FROM short_links \
             ORDER BY created_at DESC, id DESC LIMIT $1"
        );

        let rows = sqlx::query_as::<_, ShortLinkRow>(&sql)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn record_click(&self, code: &str) -> Result<Option<String>, AppError> {
        // Increment-if-exists in one statement: no separate existence check,
        // no read-modify-write, so concurrent redirects cannot lose counts.
        let long_url = sqlx::query_scalar::<_, String>(
            "UPDATE short_links \
             SET clicks = clicks + 1, updated_at = now() \
             WHERE short_code = $1 \
             RETURNING long_url",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(long_url)
    }

    async fn delete(&self, id: i64) -> Result<Option<DeletedLink>, AppError> {
        let row = sqlx::query_as::<_, DeletedRow>(
            "DELETE FROM short_links WHERE id = $1 RETURNING id, short_code",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| DeletedLink {
            id: r.id,
            short_code: r.short_code,
        }))
    }
}
