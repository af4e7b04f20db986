//! Wire representations of short link records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{DeletedLink, ShortLink};

/// JSON shape of a short link record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkDto {
    pub id: i64,
    pub full_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShortLink> for ShortLinkDto {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            full_url: link.long_url,
            short_code: link.short_code,
            clicks: link.clicks,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Response for the listing endpoint.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub message: &'static str,
    pub data: Vec<ShortLinkDto>,
}

/// Identifying fields of a removed record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedLinkDto {
    pub id: i64,
    pub short_code: String,
}

impl From<DeletedLink> for DeletedLinkDto {
    fn from(deleted: DeletedLink) -> Self {
        Self {
            id: deleted.id,
            short_code: deleted.short_code,
        }
    }
}

/// Response for the delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub data: DeletedLinkDto,
}
