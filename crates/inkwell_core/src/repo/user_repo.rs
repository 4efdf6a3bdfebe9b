//! User account repository contracts and SQLite implementation.

use crate::db::now_epoch_ms;
use crate::model::user::{User, UserId};
use crate::repo::constraint::translate_write_error;
use crate::repo::{ensure_table_ready, RecordKind, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const USER_COLUMNS: &[&str] = &["id", "username", "created_at"];

/// Repository interface for login accounts.
pub trait UserRepository {
    /// Inserts a user; a taken username yields `UniqueViolation`.
    fn create_user(&self, username: &str) -> RepoResult<User>;
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Deletes a user and, through cascades, everything its authors own.
    fn delete_user(&self, id: UserId) -> RepoResult<()>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "users", USER_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, username: &str) -> RepoResult<User> {
        let created_at = now_epoch_ms();
        self.conn
            .execute(
                "INSERT INTO users (username, created_at) VALUES (?1, ?2);",
                params![username, created_at],
            )
            .map_err(|err| translate_write_error(err, None))?;

        Ok(User {
            id: self.conn.last_insert_rowid(),
            username: username.to_string(),
            created_at,
        })
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                "SELECT id, username, created_at FROM users WHERE id = ?1;",
                [id],
                parse_user_row,
            )
            .optional()?;
        Ok(user)
    }

    fn delete_user(&self, id: UserId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: RecordKind::User,
                id,
            });
        }
        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        created_at: row.get("created_at")?,
    })
}
