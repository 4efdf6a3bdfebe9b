//! Comment repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Insert comments together with the parent post timestamp touch.
//! - List comments of one post.
//!
//! # Invariants
//! - The comment insert and the parent `last_updated`/`updated_at` write run
//!   in one immediate transaction: both persist or neither does.
//! - Listing never fails for an unknown post; it yields no rows.

use crate::db::now_epoch_ms;
use crate::model::comment::Comment;
use crate::model::post::PostId;
use crate::repo::constraint::translate_write_error;
use crate::repo::{ensure_table_ready, RecordKind, RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const COMMENT_COLUMNS: &[&str] = &["id", "content", "created_at", "post_id"];

/// Repository interface for comments.
pub trait CommentRepository {
    /// Inserts a comment and stamps the parent post with its creation time.
    fn create_comment(&self, post_id: PostId, content: &str) -> RepoResult<Comment>;
    /// Lists comments of a post, oldest first.
    fn list_comments(&self, post_id: PostId) -> RepoResult<Vec<Comment>>;
}

/// SQLite-backed comment repository.
pub struct SqliteCommentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCommentRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "comments", COMMENT_COLUMNS)?;
        ensure_table_ready(conn, "posts", &["id", "updated_at", "last_updated"])?;
        Ok(Self { conn })
    }
}

impl CommentRepository for SqliteCommentRepository<'_> {
    fn create_comment(&self, post_id: PostId, content: &str) -> RepoResult<Comment> {
        let created_at = now_epoch_ms();
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO comments (content, created_at, post_id) VALUES (?1, ?2, ?3);",
            params![content, created_at, post_id],
        )
        .map_err(|err| translate_write_error(err, Some((RecordKind::Post, post_id))))?;
        let id = tx.last_insert_rowid();

        touch_parent_post(&tx, post_id, created_at)?;
        tx.commit()?;

        Ok(Comment {
            id,
            content: content.to_string(),
            created_at,
            post_id,
        })
    }

    fn list_comments(&self, post_id: PostId) -> RepoResult<Vec<Comment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, content, created_at, post_id
             FROM comments
             WHERE post_id = ?1
             ORDER BY created_at ASC, id ASC;",
        )?;
        let mut rows = stmt.query([post_id])?;
        let mut comments = Vec::new();
        while let Some(row) = rows.next()? {
            comments.push(parse_comment_row(row)?);
        }
        Ok(comments)
    }
}

fn touch_parent_post(tx: &Transaction<'_>, post_id: PostId, stamp: i64) -> RepoResult<()> {
    let changed = tx.execute(
        "UPDATE posts
         SET
            last_updated = ?2,
            updated_at = ?2
         WHERE id = ?1;",
        params![post_id, stamp],
    )?;
    if changed == 0 {
        return Err(RepoError::NotFound {
            kind: RecordKind::Post,
            id: post_id,
        });
    }
    Ok(())
}

fn parse_comment_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get("id")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        post_id: row.get("post_id")?,
    })
}
