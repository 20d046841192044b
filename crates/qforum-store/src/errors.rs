//! Error handling for qforum-store
//!
//! Wraps qforum-core's ForumError with store-specific constructors

use qforum_core::errors::ForumError;

/// Result type alias using ForumError
pub type Result<T> = qforum_core::errors::Result<T>;

/// Map a rusqlite error into the canonical taxonomy
///
/// Constraint failures (missing foreign key, duplicate association pair)
/// become `ConstraintViolation`; everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> ForumError {
    match &err {
        rusqlite::Error::SqliteFailure(e, msg)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            ForumError::ConstraintViolation {
                message: msg.clone().unwrap_or_else(|| e.to_string()),
            }
        }
        _ => ForumError::Persistence {
            message: err.to_string(),
        },
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ForumError {
    ForumError::Migration {
        migration_id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ForumError {
    ForumError::Migration {
        migration_id: migration_id.to_string(),
        reason: format!("checksum mismatch: expected {}, got {}", expected, actual),
    }
}

/// Create a malformed predicate error
pub fn malformed_predicate(reason: impl Into<String>) -> ForumError {
    ForumError::MalformedPredicate {
        reason: reason.into(),
    }
}

/// Create a not-found error for a required singular lookup
pub fn not_found(table: &'static str, id: i64) -> ForumError {
    ForumError::NotFound { table, id }
}
