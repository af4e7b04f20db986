//! Long URL validation and normalization.
//!
//! Bare hosts like `example.com/page` are accepted and prefixed with
//! `https://` before persistence, mirroring what the submit form sends.
//! Everything else must already be a well-formed HTTP(S) URL.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Maximum accepted length of a long URL, after scheme prefixing.
pub const MAX_URL_LENGTH: usize = 2048;

/// Matches any explicit URL scheme (`https://`, `ftp://`, ...).
static SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").unwrap());

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL is too long (maximum {MAX_URL_LENGTH} characters)")]
    TooLong,
}

/// Normalizes a submitted URL to its persisted form.
///
/// # Rules
///
/// 1. Input with no scheme gets `https://` prefixed
/// 2. Only `http` and `https` schemes are accepted
/// 3. Length is capped at [`MAX_URL_LENGTH`]
/// 4. Host case and default ports are canonicalized by the parser
///
/// The result always matches `^https?://.+`.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for explicit
/// non-HTTP(S) schemes and [`UrlNormalizationError::InvalidFormat`] for
/// anything the parser rejects.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::InvalidFormat(
            "empty URL".to_string(),
        ));
    }

    let candidate = if SCHEME_REGEX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    if candidate.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    let url = Url::parse(&candidate)
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(UrlNormalizationError::InvalidFormat(
            "missing host".to_string(),
        ));
    }

    Ok(url.to_string())
}
