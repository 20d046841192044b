//! Repository layer
//!
//! One repository per entity type plus the two association resolvers.
//! Every function takes the connection explicitly; repositories hold no
//! state of their own.

pub mod follows;
pub mod likes;
pub mod questions;
pub mod replies;
pub mod users;

pub use follows::FollowRepo;
pub use likes::LikeRepo;
pub use questions::QuestionRepo;
pub use replies::ReplyRepo;
pub use users::UserRepo;
