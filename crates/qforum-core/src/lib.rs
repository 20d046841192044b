//! QForum core domain
//!
//! Provides:
//! - Entity types (`User`, `Question`, `Reply`) as value-like row snapshots
//! - The canonical error taxonomy (`ForumError`)
//! - The logging facility

pub mod errors;
pub mod logging;
pub mod model;

// Re-export key types
pub use errors::{ForumError, Result};
pub use model::{Question, Reply, User};
