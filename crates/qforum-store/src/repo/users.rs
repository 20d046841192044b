//! User repository
//!
//! Finders, the save upsert, relationship traversal, and the karma metric.

use crate::errors::{from_rusqlite, Result};
use crate::records::{self, Entity, FieldMatch};
use crate::repo::{FollowRepo, LikeRepo, QuestionRepo, ReplyRepo};
use qforum_core::model::{Question, Reply, User};
use rusqlite::{params, Connection, Row};

impl Entity for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["id", "fname", "lname"];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get("id")?,
            fname: row.get("fname")?,
            lname: row.get("lname")?,
        })
    }
}

/// Stateless repository over the `users` table
pub struct UserRepo;

impl UserRepo {
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<User>> {
        records::find_by_id::<User>(conn, id)
    }

    /// Like `find_by_id`, but absence is a `NotFound` error
    pub fn get(conn: &Connection, id: i64) -> Result<User> {
        records::get::<User>(conn, id)
    }

    pub fn all(conn: &Connection) -> Result<Vec<User>> {
        records::all::<User>(conn)
    }

    /// Exact match on both name parts; zero, one, or many results since
    /// names are not unique
    pub fn find_by_name(conn: &Connection, fname: &str, lname: &str) -> Result<Vec<User>> {
        records::where_matching::<User>(
            conn,
            FieldMatch::new("fname", fname.to_string()).and("lname", lname.to_string()),
        )
    }

    /// Insert or update by identifier presence
    ///
    /// No id means insert; the store-assigned id is written back into the
    /// entity. A set id means update of all mutable fields. There is no
    /// conflict detection.
    pub fn save(conn: &Connection, user: &mut User) -> Result<()> {
        match user.id {
            Some(id) => {
                conn.execute(
                    "UPDATE users SET fname = ?1, lname = ?2 WHERE id = ?3",
                    params![user.fname, user.lname, id],
                )
                .map_err(from_rusqlite)?;
                tracing::debug!(user_id = id, "updated user");
            }
            None => {
                conn.execute(
                    "INSERT INTO users (fname, lname) VALUES (?1, ?2)",
                    params![user.fname, user.lname],
                )
                .map_err(from_rusqlite)?;
                user.id = Some(conn.last_insert_rowid());
                tracing::debug!(user_id = ?user.id, "inserted user");
            }
        }
        Ok(())
    }

    pub fn authored_questions(conn: &Connection, user_id: i64) -> Result<Vec<Question>> {
        QuestionRepo::find_by_author_id(conn, user_id)
    }

    pub fn authored_replies(conn: &Connection, user_id: i64) -> Result<Vec<Reply>> {
        ReplyRepo::find_by_user_id(conn, user_id)
    }

    pub fn followed_questions(conn: &Connection, user_id: i64) -> Result<Vec<Question>> {
        FollowRepo::followed_questions_for_user_id(conn, user_id)
    }

    pub fn liked_questions(conn: &Connection, user_id: i64) -> Result<Vec<Question>> {
        LikeRepo::liked_questions_for_user_id(conn, user_id)
    }

    /// Ratio of distinct authored questions to likes received across them,
    /// where an authored question with zero likes still contributes one to
    /// the denominator
    ///
    /// A user with no recorded likes at all (which covers no authored
    /// questions) gets 0.0 rather than a division fault.
    pub fn average_karma(conn: &Connection, user_id: i64) -> Result<f64> {
        // COUNT(*) over the left join counts every like plus one row per
        // unliked question; COUNT(question_likes.user_id) counts likes only.
        let (questions, likes, denominator): (i64, i64, i64) = conn
            .query_row(
                "SELECT COUNT(DISTINCT questions.id),
                        COUNT(question_likes.user_id),
                        COUNT(*)
                 FROM questions
                 LEFT JOIN question_likes ON question_likes.question_id = questions.id
                 WHERE questions.author_id = ?1",
                [user_id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .map_err(from_rusqlite)?;

        if likes == 0 {
            return Ok(0.0);
        }
        Ok(questions as f64 / denominator as f64)
    }
}
