//! Reply repository
//!
//! Replies form a tree per question via the self-referential `reply_id`
//! column; this layer only ever returns one level (direct children), the
//! caller assembles trees.

use crate::errors::{from_rusqlite, Result};
use crate::records::{self, Entity, FieldMatch};
use crate::repo::{QuestionRepo, UserRepo};
use qforum_core::model::{Question, Reply, User};
use rusqlite::{params, Connection, Row};

impl Entity for Reply {
    const TABLE: &'static str = "replies";
    const COLUMNS: &'static [&'static str] = &["id", "body", "reply_id", "question_id", "user_id"];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Reply {
            id: row.get("id")?,
            body: row.get("body")?,
            parent_id: row.get("reply_id")?,
            question_id: row.get("question_id")?,
            user_id: row.get("user_id")?,
        })
    }
}

/// Stateless repository over the `replies` table
pub struct ReplyRepo;

impl ReplyRepo {
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Reply>> {
        records::find_by_id::<Reply>(conn, id)
    }

    /// Like `find_by_id`, but absence is a `NotFound` error
    pub fn get(conn: &Connection, id: i64) -> Result<Reply> {
        records::get::<Reply>(conn, id)
    }

    pub fn all(conn: &Connection) -> Result<Vec<Reply>> {
        records::all::<Reply>(conn)
    }

    pub fn find_by_user_id(conn: &Connection, user_id: i64) -> Result<Vec<Reply>> {
        records::where_matching::<Reply>(conn, FieldMatch::new("user_id", user_id))
    }

    pub fn find_by_question_id(conn: &Connection, question_id: i64) -> Result<Vec<Reply>> {
        records::where_matching::<Reply>(conn, FieldMatch::new("question_id", question_id))
    }

    /// Direct children of the given reply, one level only
    pub fn find_by_parent_id(conn: &Connection, parent_id: i64) -> Result<Vec<Reply>> {
        records::where_matching::<Reply>(conn, FieldMatch::new("reply_id", parent_id))
    }

    /// Insert or update by identifier presence, over
    /// (body, reply_id, question_id, user_id)
    pub fn save(conn: &Connection, reply: &mut Reply) -> Result<()> {
        match reply.id {
            Some(id) => {
                conn.execute(
                    "UPDATE replies SET body = ?1, reply_id = ?2, question_id = ?3, user_id = ?4
                     WHERE id = ?5",
                    params![
                        reply.body,
                        reply.parent_id,
                        reply.question_id,
                        reply.user_id,
                        id
                    ],
                )
                .map_err(from_rusqlite)?;
                tracing::debug!(reply_id = id, "updated reply");
            }
            None => {
                conn.execute(
                    "INSERT INTO replies (body, reply_id, question_id, user_id)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![reply.body, reply.parent_id, reply.question_id, reply.user_id],
                )
                .map_err(from_rusqlite)?;
                reply.id = Some(conn.last_insert_rowid());
                tracing::debug!(reply_id = ?reply.id, "inserted reply");
            }
        }
        Ok(())
    }

    pub fn author(conn: &Connection, reply: &Reply) -> Result<Option<User>> {
        UserRepo::find_by_id(conn, reply.user_id)
    }

    pub fn question(conn: &Connection, reply: &Reply) -> Result<Option<Question>> {
        QuestionRepo::find_by_id(conn, reply.question_id)
    }

    /// The parent reply, or `None` for a root reply
    pub fn parent_reply(conn: &Connection, reply: &Reply) -> Result<Option<Reply>> {
        match reply.parent_id {
            Some(parent_id) => Self::find_by_id(conn, parent_id),
            None => Ok(None),
        }
    }

    /// Direct children of this reply, ordered by id
    pub fn child_replies(conn: &Connection, reply_id: i64) -> Result<Vec<Reply>> {
        Self::find_by_parent_id(conn, reply_id)
    }
}
