//! Question-follow association resolver
//!
//! Pure join queries over `question_follows`; no caching, every call
//! re-executes against the store.

use crate::errors::{from_rusqlite, Result};
use crate::records::Entity;
use qforum_core::model::{Question, User};
use rusqlite::{params, Connection};

/// Stateless query set over the `question_follows` join table
pub struct FollowRepo;

impl FollowRepo {
    /// Record that a user follows a question
    ///
    /// A duplicate pair or a dangling id surfaces the store's constraint
    /// violation unmodified.
    pub fn follow(conn: &Connection, user_id: i64, question_id: i64) -> Result<()> {
        conn.execute(
            "INSERT INTO question_follows (user_id, question_id) VALUES (?1, ?2)",
            params![user_id, question_id],
        )
        .map_err(from_rusqlite)?;
        tracing::debug!(user_id, question_id, "user followed question");
        Ok(())
    }

    /// Remove a follow; returns whether a row was actually deleted
    pub fn unfollow(conn: &Connection, user_id: i64, question_id: i64) -> Result<bool> {
        let deleted = conn
            .execute(
                "DELETE FROM question_follows WHERE user_id = ?1 AND question_id = ?2",
                params![user_id, question_id],
            )
            .map_err(from_rusqlite)?;
        Ok(deleted > 0)
    }

    pub fn followers_for_question_id(conn: &Connection, question_id: i64) -> Result<Vec<User>> {
        let mut stmt = conn
            .prepare(
                "SELECT users.id, users.fname, users.lname
                 FROM users
                 JOIN question_follows ON question_follows.user_id = users.id
                 WHERE question_follows.question_id = ?1
                 ORDER BY users.id",
            )
            .map_err(from_rusqlite)?;

        let users = stmt
            .query_map([question_id], |row| User::from_row(row))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(users)
    }

    pub fn followed_questions_for_user_id(conn: &Connection, user_id: i64) -> Result<Vec<Question>> {
        let mut stmt = conn
            .prepare(
                "SELECT questions.id, questions.title, questions.body, questions.author_id
                 FROM questions
                 JOIN question_follows ON question_follows.question_id = questions.id
                 WHERE question_follows.user_id = ?1
                 ORDER BY questions.id",
            )
            .map_err(from_rusqlite)?;

        let questions = stmt
            .query_map([user_id], |row| Question::from_row(row))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(questions)
    }

    /// Up to `n` questions by descending follower count, ties broken by
    /// ascending question id
    pub fn most_followed_questions(conn: &Connection, n: i64) -> Result<Vec<Question>> {
        let mut stmt = conn
            .prepare(
                "SELECT questions.id, questions.title, questions.body, questions.author_id
                 FROM questions
                 JOIN question_follows ON question_follows.question_id = questions.id
                 GROUP BY questions.id
                 ORDER BY COUNT(question_follows.user_id) DESC, questions.id ASC
                 LIMIT ?1",
            )
            .map_err(from_rusqlite)?;

        let questions = stmt
            .query_map([n], |row| Question::from_row(row))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(questions)
    }
}
