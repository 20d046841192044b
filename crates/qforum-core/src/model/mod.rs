//! Domain entities
//!
//! Each entity is a value-like snapshot of one row. Entities never hold
//! live references to each other; traversal goes back through the store
//! using the foreign-key scalars kept here.

mod question;
mod reply;
mod user;

pub use question::Question;
pub use reply::Reply;
pub use user::User;
