//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts per record kind.
//! - Isolate SQLite query details from service/business orchestration.
//! - Translate store constraint failures into semantic errors.
//!
//! # Invariants
//! - Uniqueness and parent existence are enforced by store constraints in a
//!   single write; repositories never pre-check and then write.
//! - Repository APIs return semantic errors (`NotFound`, `UniqueViolation`,
//!   `MissingParent`) in addition to DB transport errors.

use crate::db::DbError;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod author_repo;
pub mod comment_repo;
mod constraint;
pub mod post_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Persisted record kinds, used to label semantic repository errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Author,
    Post,
    Comment,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Author => "author",
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

/// Repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Target row of an update/delete does not exist.
    NotFound { kind: RecordKind, id: i64 },
    /// Insert referenced a parent row that does not exist.
    MissingParent { kind: RecordKind, id: i64 },
    /// Write collided with a `UNIQUE` column.
    UniqueViolation { table: String, column: String },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{} not found: {id}", kind.as_str()),
            Self::MissingParent { kind, id } => {
                write!(f, "referenced {} not found: {id}", kind.as_str())
            }
            Self::UniqueViolation { table, column } => {
                write!(f, "unique constraint violated on {table}.{column}")
            }
            Self::MissingRequiredTable(table) => write!(f, "required table missing: {table}"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column missing: {table}.{column}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Verifies that `table` exists with every listed column.
///
/// Repositories call this from `try_new` so that a connection that skipped
/// migrations fails fast instead of on the first query.
pub(crate) fn ensure_table_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut present = Vec::new();
    while let Some(row) = rows.next()? {
        present.push(row.get::<_, String>(1)?);
    }

    for column in columns {
        if !present.iter().any(|name| name == column) {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{ensure_table_ready, RepoError};
    use rusqlite::Connection;

    #[test]
    fn ensure_table_ready_reports_missing_table_and_column() {
        let conn = Connection::open_in_memory().unwrap();
        let err = ensure_table_ready(&conn, "posts", &["id"]).unwrap_err();
        assert!(matches!(err, RepoError::MissingRequiredTable("posts")));

        conn.execute_batch("CREATE TABLE posts (id INTEGER PRIMARY KEY);")
            .unwrap();
        ensure_table_ready(&conn, "posts", &["id"]).unwrap();
        let err = ensure_table_ready(&conn, "posts", &["id", "title"]).unwrap_err();
        assert!(matches!(
            err,
            RepoError::MissingRequiredColumn {
                table: "posts",
                column: "title"
            }
        ));
    }
}
