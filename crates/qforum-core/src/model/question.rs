use serde::{Deserialize, Serialize};

/// A question posted by a user, backed by one row of `questions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier; `None` until the first save
    pub id: Option<i64>,

    pub title: String,

    pub body: String,

    /// Foreign reference to `users.id`; not enforced in memory
    pub author_id: i64,
}

impl Question {
    /// Create a new, unsaved question
    pub fn new(title: impl Into<String>, body: impl Into<String>, author_id: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }

    /// Check whether this question has been written to the store
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
