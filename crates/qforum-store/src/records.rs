//! Generic record access
//!
//! The find-by-id / all / where surface shared by every entity type.
//! Each entity binds a static table name and column list; rows map to
//! entities by name-keyed column access, one row to exactly one entity.

use crate::errors::{from_rusqlite, malformed_predicate, not_found, Result};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row};

/// An entity type backed by a fixed table
///
/// Table and column names are compile-time constants; nothing is derived
/// from the type name at runtime.
pub trait Entity: Sized {
    /// Backing table name
    const TABLE: &'static str;

    /// Column list, in schema order; `from_row` reads these by name
    const COLUMNS: &'static [&'static str];

    /// Map one row into one entity, every field verbatim
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Exact-match column/value pairs, conjoined with AND
///
/// Non-empty by construction: `new` seeds the first pair, `and` appends.
/// Values are always parameter-bound; column names are validated as plain
/// identifiers before any SQL is built.
#[derive(Debug, Clone)]
pub struct FieldMatch(Vec<(String, Value)>);

impl FieldMatch {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(vec![(column.into(), value.into())])
    }

    pub fn and(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((column.into(), value.into()));
        self
    }
}

/// A `where` condition: either trusted raw SQL or bound field matches
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Raw SQL condition text; the caller is trusted not to interpolate
    /// untrusted input here
    Raw(String),
    /// Parameter-bound exact matches
    Fields(FieldMatch),
}

impl From<FieldMatch> for Predicate {
    fn from(fields: FieldMatch) -> Self {
        Predicate::Fields(fields)
    }
}

impl From<&str> for Predicate {
    fn from(sql: &str) -> Self {
        Predicate::Raw(sql.to_string())
    }
}

impl From<String> for Predicate {
    fn from(sql: String) -> Self {
        Predicate::Raw(sql)
    }
}

impl Predicate {
    /// Render the condition and its bound parameters
    ///
    /// Fails fast with `MalformedPredicate` before any query executes.
    fn clause(self) -> Result<(String, Vec<Value>)> {
        match self {
            Predicate::Raw(sql) => {
                if sql.trim().is_empty() {
                    return Err(malformed_predicate("raw predicate is empty"));
                }
                Ok((sql, Vec::new()))
            }
            Predicate::Fields(FieldMatch(fields)) => {
                if fields.is_empty() {
                    return Err(malformed_predicate("no fields to match"));
                }
                let mut parts = Vec::with_capacity(fields.len());
                let mut params = Vec::with_capacity(fields.len());
                for (i, (column, value)) in fields.into_iter().enumerate() {
                    if !is_identifier(&column) {
                        return Err(malformed_predicate(format!(
                            "invalid column name: {column:?}"
                        )));
                    }
                    parts.push(format!("{} = ?{}", column, i + 1));
                    params.push(value);
                }
                Ok((parts.join(" AND "), params))
            }
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn select_sql<E: Entity>() -> String {
    format!("SELECT {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
}

/// Find one entity by primary key; absence is `Ok(None)`
pub fn find_by_id<E: Entity>(conn: &Connection, id: i64) -> Result<Option<E>> {
    let sql = format!("{} WHERE id = ?1", select_sql::<E>());
    conn.query_row(&sql, [id], |row| E::from_row(row))
        .optional()
        .map_err(from_rusqlite)
}

/// Find one entity by primary key; absence is `NotFound`
pub fn get<E: Entity>(conn: &Connection, id: i64) -> Result<E> {
    find_by_id::<E>(conn, id)?.ok_or_else(|| not_found(E::TABLE, id))
}

/// Full-table scan, ordered by id
pub fn all<E: Entity>(conn: &Connection) -> Result<Vec<E>> {
    let sql = format!("{} ORDER BY id", select_sql::<E>());
    collect_rows::<E>(conn, &sql, Vec::new())
}

/// All entities matching the predicate, ordered by id
pub fn where_matching<E: Entity>(
    conn: &Connection,
    predicate: impl Into<Predicate>,
) -> Result<Vec<E>> {
    let (clause, params) = predicate.into().clause()?;
    let sql = format!("{} WHERE {} ORDER BY id", select_sql::<E>(), clause);
    collect_rows::<E>(conn, &sql, params)
}

/// First entity matching the predicate, or `None`
pub fn find_by<E: Entity>(conn: &Connection, predicate: impl Into<Predicate>) -> Result<Option<E>> {
    Ok(where_matching::<E>(conn, predicate)?.into_iter().next())
}

fn collect_rows<E: Entity>(conn: &Connection, sql: &str, params: Vec<Value>) -> Result<Vec<E>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(rusqlite::params_from_iter(params), |row| E::from_row(row))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}
