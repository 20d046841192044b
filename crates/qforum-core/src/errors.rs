use thiserror::Error;

/// Result type alias using ForumError
pub type Result<T> = std::result::Result<T, ForumError>;

/// Error taxonomy for the QForum data-access layer
///
/// Absence of a row is a normal outcome for the finder surface
/// (`find_by_id`/`find_by` return `None`, plural finders return empty
/// vectors); `NotFound` only comes from `get`-style accessors where the
/// caller has declared that absence is an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForumError {
    /// Singular lookup found no row and the caller required one
    #[error("no row in {table} with id {id}")]
    NotFound { table: &'static str, id: i64 },

    /// The store rejected an insert or update (missing foreign key,
    /// duplicate follow/like pair, ...)
    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// A `where`-style call was given an unsupported predicate shape;
    /// raised before any SQL executes
    #[error("malformed predicate: {reason}")]
    MalformedPredicate { reason: String },

    /// A schema migration failed to apply or its checksum did not match
    #[error("migration {migration_id} failed: {reason}")]
    Migration {
        migration_id: String,
        reason: String,
    },

    /// Any other store-level failure, propagated verbatim
    #[error("persistence error: {message}")]
    Persistence { message: String },
}
