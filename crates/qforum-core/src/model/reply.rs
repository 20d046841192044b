use serde::{Deserialize, Serialize};

/// A reply to a question, backed by one row of `replies`
///
/// Replies form a tree per question through `parent_id`. A reply with no
/// parent is a root reply; a parent, if set, must belong to the same
/// question (the caller's responsibility, not enforced here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Store-assigned identifier; `None` until the first save
    pub id: Option<i64>,

    pub body: String,

    /// Parent reply id (`replies.reply_id` column); `None` for root replies
    pub parent_id: Option<i64>,

    /// Foreign reference to `questions.id`
    pub question_id: i64,

    /// Foreign reference to `users.id` (the reply's author)
    pub user_id: i64,
}

impl Reply {
    /// Create a new, unsaved reply
    pub fn new(
        body: impl Into<String>,
        parent_id: Option<i64>,
        question_id: i64,
        user_id: i64,
    ) -> Self {
        Self {
            id: None,
            body: body.into(),
            parent_id,
            question_id,
            user_id,
        }
    }

    /// Check whether this reply is a root reply for its question
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check whether this reply has been written to the store
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
