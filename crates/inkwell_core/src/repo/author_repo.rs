//! Author repository contracts and SQLite implementation.
//!
//! # Invariants
//! - `authors.email` uniqueness is decided by the store in the same statement
//!   that writes the row, so concurrent writers cannot both succeed.
//! - A missing owning user surfaces as `MissingParent(User)`.

use crate::model::author::{Author, AuthorId, AuthorPatch, NewAuthor};
use crate::repo::constraint::translate_write_error;
use crate::repo::{ensure_table_ready, RecordKind, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const AUTHOR_COLUMNS: &[&str] = &["id", "user_id", "name", "email", "bio"];

const AUTHOR_SELECT_SQL: &str = "SELECT id, user_id, name, email, bio FROM authors";

/// Repository interface for author profiles.
pub trait AuthorRepository {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<Author>;
    /// Applies a patch; `None` fields keep their stored value.
    fn update_author(&self, id: AuthorId, patch: &AuthorPatch) -> RepoResult<Author>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "authors", AUTHOR_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&self, author: &NewAuthor) -> RepoResult<Author> {
        self.conn
            .execute(
                "INSERT INTO authors (user_id, name, email, bio) VALUES (?1, ?2, ?3, ?4);",
                params![
                    author.user_id,
                    author.name.as_str(),
                    author.email.as_str(),
                    author.bio.as_deref(),
                ],
            )
            .map_err(|err| {
                translate_write_error(err, author.user_id.map(|id| (RecordKind::User, id)))
            })?;

        Ok(Author {
            id: self.conn.last_insert_rowid(),
            user_id: author.user_id,
            name: author.name.clone(),
            email: author.email.clone(),
            bio: author.bio.clone(),
        })
    }

    fn update_author(&self, id: AuthorId, patch: &AuthorPatch) -> RepoResult<Author> {
        let changed = self
            .conn
            .execute(
                "UPDATE authors
                 SET
                    name = COALESCE(?2, name),
                    email = COALESCE(?3, email),
                    bio = COALESCE(?4, bio)
                 WHERE id = ?1;",
                params![
                    id,
                    patch.name.as_deref(),
                    patch.email.as_deref(),
                    patch.bio.as_deref(),
                ],
            )
            .map_err(|err| translate_write_error(err, None))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: RecordKind::Author,
                id,
            });
        }

        self.get_author(id)?.ok_or(RepoError::NotFound {
            kind: RecordKind::Author,
            id,
        })
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let author = self
            .conn
            .query_row(
                &format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_author_row,
            )
            .optional()?;
        Ok(author)
    }
}

fn parse_author_row(row: &Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        bio: row.get("bio")?,
    })
}
