//! Short link entity: the sole persisted URL mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping between a short code and a long URL.
///
/// `short_code` is the hard uniqueness key, enforced by a store-level
/// constraint. `long_url` is a soft dedup key only: repeated submissions of
/// the same URL reuse the existing record, but no constraint forbids
/// duplicates created by a racing pair of requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(
        id: i64,
        long_url: String,
        short_code: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            long_url,
            short_code,
            clicks,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new short link.
///
/// The store assigns `id`, `clicks` and both timestamps on insert.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub long_url: String,
    pub short_code: String,
}

/// Identifying fields of a removed record, returned by the delete flow.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedLink {
    pub id: i64,
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "https://example.com/page".to_string(),
            "a1b2c3d4e5".to_string(),
            0,
            now,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.long_url, "https://example.com/page");
        assert_eq!(link.short_code, "a1b2c3d4e5");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_short_link_carries_no_store_fields() {
        let new_link = NewShortLink {
            long_url: "https://rust-lang.org/".to_string(),
            short_code: "xyz7890abc".to_string(),
        };

        assert_eq!(new_link.long_url, "https://rust-lang.org/");
        assert_eq!(new_link.short_code, "xyz7890abc");
    }
}
