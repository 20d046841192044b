use serde::{Deserialize, Serialize};

/// A forum member, backed by one row of `users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier; `None` until the first save
    pub id: Option<i64>,

    /// First name
    pub fname: String,

    /// Last name (not guaranteed unique, even combined with `fname`)
    pub lname: String,
}

impl User {
    /// Create a new, unsaved user
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            id: None,
            fname: fname.into(),
            lname: lname.into(),
        }
    }

    /// Check whether this user has been written to the store
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.fname, self.lname)
    }
}
