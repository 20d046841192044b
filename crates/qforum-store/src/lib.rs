//! QForum Store - SQLite persistence for the Q&A forum domain
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded schema migrations with checksums (`migrations`)
//! - Generic record access shared by every entity type (`records`)
//! - Per-entity repositories and association resolvers (`repo`)
//!
//! There is no global connection: the application opens one `Connection`
//! at startup and passes it into every call.

pub mod db;
pub mod errors;
pub mod migrations;
pub mod records;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use records::{Entity, FieldMatch, Predicate};
