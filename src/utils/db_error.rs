//! Classification helpers for database errors.

/// Name of the uniqueness constraint on `short_links.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "short_links_short_code_key";

/// Returns true when `e` is a unique-constraint violation on the short code
/// column.
///
/// The creation flow treats this as "another writer claimed the code first,
/// generate a new candidate", never as a fatal error.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_CODE_CONSTRAINT))
}
