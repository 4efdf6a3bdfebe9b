//! Translation of SQLite constraint failures into repository errors.

use crate::repo::{RecordKind, RepoError};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::{ffi, ErrorCode};

static UNIQUE_FAILED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"UNIQUE constraint failed: (\w+)\.(\w+)").expect("valid unique constraint regex")
});

#[derive(Debug, PartialEq, Eq)]
enum ConstraintViolation {
    Unique { table: String, column: String },
    ForeignKey,
}

fn classify(err: &rusqlite::Error) -> Option<ConstraintViolation> {
    let rusqlite::Error::SqliteFailure(failure, message) = err else {
        return None;
    };
    if failure.code != ErrorCode::ConstraintViolation {
        return None;
    }

    match failure.extended_code {
        ffi::SQLITE_CONSTRAINT_UNIQUE => {
            let caps = UNIQUE_FAILED_RE.captures(message.as_deref()?)?;
            Some(ConstraintViolation::Unique {
                table: caps[1].to_string(),
                column: caps[2].to_string(),
            })
        }
        ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(ConstraintViolation::ForeignKey),
        _ => None,
    }
}

/// Maps a failed write to a semantic error.
///
/// `parent` names the only row the statement references through a foreign
/// key; a foreign-key failure is attributed to it.
pub(crate) fn translate_write_error(
    err: rusqlite::Error,
    parent: Option<(RecordKind, i64)>,
) -> RepoError {
    match (classify(&err), parent) {
        (Some(ConstraintViolation::Unique { table, column }), _) => {
            RepoError::UniqueViolation { table, column }
        }
        (Some(ConstraintViolation::ForeignKey), Some((kind, id))) => {
            RepoError::MissingParent { kind, id }
        }
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::translate_write_error;
    use crate::repo::{RecordKind, RepoError};
    use rusqlite::Connection;

    fn scratch() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             CREATE TABLE parents (id INTEGER PRIMARY KEY, name TEXT UNIQUE);
             CREATE TABLE children (
                id INTEGER PRIMARY KEY,
                parent_id INTEGER NOT NULL REFERENCES parents(id)
             );
             INSERT INTO parents (id, name) VALUES (1, 'taken');",
        )
        .unwrap();
        conn
    }

    #[test]
    fn unique_failure_names_table_and_column() {
        let conn = scratch();
        let err = conn
            .execute("INSERT INTO parents (name) VALUES ('taken');", [])
            .unwrap_err();
        match translate_write_error(err, None) {
            RepoError::UniqueViolation { table, column } => {
                assert_eq!(table, "parents");
                assert_eq!(column, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn foreign_key_failure_is_attributed_to_parent() {
        let conn = scratch();
        let err = conn
            .execute("INSERT INTO children (parent_id) VALUES (42);", [])
            .unwrap_err();
        assert!(matches!(
            translate_write_error(err, Some((RecordKind::User, 42))),
            RepoError::MissingParent {
                kind: RecordKind::User,
                id: 42
            }
        ));
    }

    #[test]
    fn other_failures_stay_db_errors() {
        let conn = scratch();
        let err = conn.execute("INSERT INTO missing VALUES (1);", []).unwrap_err();
        assert!(matches!(translate_write_error(err, None), RepoError::Db(_)));
    }
}
