//! # Database Error Types
//!
//! Two kinds of failure leave this crate:
//!
//! - [`DbError`]: infrastructure failures while opening the pool or running
//!   migrations. Only the process entry point sees these.
//! - [`InventoryError`]: every failure of a repository call, produced by
//!   [`classify`] at the moment a raw `sqlx::Error` first surfaces.
//!
//! ## Classification
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Driver Error Classification                          │
//! │                                                                         │
//! │  raw error message                                                     │
//! │       │                                                                 │
//! │       ├── contains a uniqueness signature?                             │
//! │       │     "violates unique constraint"   (PostgreSQL)                │
//! │       │     "UNIQUE constraint failed"     (SQLite)                    │
//! │       │         └──► UniqueConstraint { cause: raw }                   │
//! │       │                                                                 │
//! │       ├── contains a no-rows signature?                                │
//! │       │     "no rows in result set"                                    │
//! │       │     "no rows returned"             (sqlx RowNotFound)          │
//! │       │         └──► NotFound { entity }                               │
//! │       │                                                                 │
//! │       └── otherwise ──► Unclassified { source: raw } (message intact)  │
//! │                                                                         │
//! │  Uniqueness is checked first: it is the more specific signal.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Matching on message text depends on the driver's wording. It lives in this
//! one function so a move to structured error codes only touches this file.

use stockpile_core::{BoxError, InventoryError};
use thiserror::Error;

/// Message fragments that identify a uniqueness violation.
pub const UNIQUE_SIGNATURES: &[&str] = &["violates unique constraint", "UNIQUE constraint failed"];

/// Message fragments that identify an empty result for a single-row query.
pub const NO_ROWS_SIGNATURES: &[&str] = &["no rows in result set", "no rows returned"];

/// Translates a raw storage error into the taxonomy.
///
/// `entity` names the entity type for [`InventoryError::NotFound`].
///
/// ## Example
/// ```rust
/// use stockpile_core::ErrorKind;
/// use stockpile_db::error::classify;
///
/// let err = classify(sqlx::Error::RowNotFound, "inventory item");
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "inventory item not found");
/// ```
pub fn classify(raw: impl Into<BoxError>, entity: &str) -> InventoryError {
    let raw = raw.into();
    let message = raw.to_string();

    if UNIQUE_SIGNATURES.iter().any(|sig| message.contains(sig)) {
        return InventoryError::unique_constraint(raw);
    }

    if NO_ROWS_SIGNATURES.iter().any(|sig| message.contains(sig)) {
        return InventoryError::not_found(entity);
    }

    InventoryError::unclassified(raw)
}

/// Database setup errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    ///
    /// ## When This Occurs
    /// - Invalid SQL in migration
    /// - A previously applied migration was edited
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A bookkeeping query failed (closed pool, locked database, ...).
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database setup operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;
    use stockpile_core::ErrorKind;

    #[test]
    fn test_postgres_unique_violation() {
        let raw = io::Error::other(
            r#"pq: duplicate key value violates unique constraint "inventory_items_name_key""#,
        );
        let err = classify(raw, "inventory item");

        assert_eq!(err.kind(), ErrorKind::UniqueConstraint);
        let cause = err.source().unwrap();
        assert!(cause.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn test_sqlite_unique_violation() {
        let err = classify(
            "(code: 2067) UNIQUE constraint failed: inventory_items.name",
            "inventory item",
        );
        assert_eq!(err.kind(), ErrorKind::UniqueConstraint);
        assert!(err.to_string().contains("inventory_items.name"));
    }

    #[test]
    fn test_no_rows_becomes_not_found() {
        let err = classify("sql: no rows in result set", "inventory item");
        assert!(matches!(err, InventoryError::NotFound { ref entity } if entity == "inventory item"));

        let err = classify(sqlx::Error::RowNotFound, "widget");
        assert!(matches!(err, InventoryError::NotFound { ref entity } if entity == "widget"));
    }

    #[test]
    fn test_uniqueness_wins_over_no_rows() {
        let err = classify(
            "violates unique constraint after no rows returned",
            "inventory item",
        );
        assert_eq!(err.kind(), ErrorKind::UniqueConstraint);
    }

    #[test]
    fn test_other_errors_pass_through_unchanged() {
        let raw = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let err = classify(raw, "inventory item");

        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.to_string(), "connection refused");

        let source = err.source().unwrap().downcast_ref::<io::Error>().unwrap();
        assert_eq!(source.kind(), io::ErrorKind::ConnectionRefused);
    }

    #[test]
    fn test_pool_errors_are_unclassified() {
        let err = classify(sqlx::Error::PoolTimedOut, "inventory item");
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }
}
