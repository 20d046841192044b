//! Question repository
//!
//! Finders, the save upsert, relationship traversal, and the ranking
//! queries (delegated to the association resolvers).

use crate::errors::{from_rusqlite, Result};
use crate::records::{self, Entity, FieldMatch};
use crate::repo::{FollowRepo, LikeRepo, ReplyRepo, UserRepo};
use qforum_core::model::{Question, Reply, User};
use rusqlite::{params, Connection, Row};

impl Entity for Question {
    const TABLE: &'static str = "questions";
    const COLUMNS: &'static [&'static str] = &["id", "title", "body", "author_id"];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Question {
            id: row.get("id")?,
            title: row.get("title")?,
            body: row.get("body")?,
            author_id: row.get("author_id")?,
        })
    }
}

/// Stateless repository over the `questions` table
pub struct QuestionRepo;

impl QuestionRepo {
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Question>> {
        records::find_by_id::<Question>(conn, id)
    }

    /// Like `find_by_id`, but absence is a `NotFound` error
    pub fn get(conn: &Connection, id: i64) -> Result<Question> {
        records::get::<Question>(conn, id)
    }

    pub fn all(conn: &Connection) -> Result<Vec<Question>> {
        records::all::<Question>(conn)
    }

    pub fn find_by_author_id(conn: &Connection, author_id: i64) -> Result<Vec<Question>> {
        records::where_matching::<Question>(conn, FieldMatch::new("author_id", author_id))
    }

    /// Insert or update by identifier presence, over (title, body, author_id)
    pub fn save(conn: &Connection, question: &mut Question) -> Result<()> {
        match question.id {
            Some(id) => {
                conn.execute(
                    "UPDATE questions SET title = ?1, body = ?2, author_id = ?3 WHERE id = ?4",
                    params![question.title, question.body, question.author_id, id],
                )
                .map_err(from_rusqlite)?;
                tracing::debug!(question_id = id, "updated question");
            }
            None => {
                conn.execute(
                    "INSERT INTO questions (title, body, author_id) VALUES (?1, ?2, ?3)",
                    params![question.title, question.body, question.author_id],
                )
                .map_err(from_rusqlite)?;
                question.id = Some(conn.last_insert_rowid());
                tracing::debug!(question_id = ?question.id, "inserted question");
            }
        }
        Ok(())
    }

    pub fn author(conn: &Connection, question: &Question) -> Result<Option<User>> {
        UserRepo::find_by_id(conn, question.author_id)
    }

    /// All replies referencing this question, as a flat id-ordered list
    pub fn replies(conn: &Connection, question_id: i64) -> Result<Vec<Reply>> {
        ReplyRepo::find_by_question_id(conn, question_id)
    }

    pub fn followers(conn: &Connection, question_id: i64) -> Result<Vec<User>> {
        FollowRepo::followers_for_question_id(conn, question_id)
    }

    pub fn likers(conn: &Connection, question_id: i64) -> Result<Vec<User>> {
        LikeRepo::likers_for_question_id(conn, question_id)
    }

    pub fn num_likes(conn: &Connection, question_id: i64) -> Result<i64> {
        LikeRepo::num_likes_for_question_id(conn, question_id)
    }

    /// Up to `n` questions by descending follower count, ties broken by
    /// ascending question id
    pub fn most_followed(conn: &Connection, n: i64) -> Result<Vec<Question>> {
        FollowRepo::most_followed_questions(conn, n)
    }

    /// Up to `n` questions by descending like count, ties broken by
    /// ascending question id
    pub fn most_liked(conn: &Connection, n: i64) -> Result<Vec<Question>> {
        LikeRepo::most_liked_questions(conn, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations;
    use qforum_core::model::User;
    use qforum_core::ForumError;

    fn setup_test_db() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        crate::db::configure(&conn).unwrap();
        migrations::apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_save_and_author_traversal() {
        let conn = setup_test_db();
        let mut author = User::new("Yogi", "Bear");
        UserRepo::save(&conn, &mut author).unwrap();

        let mut question = Question::new("Picnic baskets?", "Where to find them.", author.id.unwrap());
        QuestionRepo::save(&conn, &mut question).unwrap();

        let found_author = QuestionRepo::author(&conn, &question).unwrap().unwrap();
        assert_eq!(found_author.id, author.id);
    }

    #[test]
    fn test_dangling_author_id_is_a_constraint_violation() {
        let conn = setup_test_db();
        let mut question = Question::new("Orphan", "No such author.", 9999);

        let err = QuestionRepo::save(&conn, &mut question).unwrap_err();
        assert!(matches!(err, ForumError::ConstraintViolation { .. }));
        assert_eq!(question.id, None);
    }
}
