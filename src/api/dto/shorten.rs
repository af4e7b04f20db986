//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::link::ShortLinkDto;

/// Request to shorten a single long URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The URL to shorten. Bare hosts are accepted; a missing scheme is
    /// prefixed with `https://` before persistence.
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub full_url: String,
}

/// Response carrying the created (or already existing) record.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub message: &'static str,
    pub data: ShortLinkDto,
}
