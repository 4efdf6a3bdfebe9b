//! Post repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide post CRUD and filtered listing over the `posts` table.
//! - Resolve the owning user of a post for authorization checks.
//!
//! # Invariants
//! - `posts.title` uniqueness is decided by the store in the writing
//!   statement; updating a post to its own title is not a collision.
//! - Every write moves `updated_at`; `created_at` is written once.
//! - List results are ordered by `id ASC`.

use crate::db::now_epoch_ms;
use crate::model::author::AuthorId;
use crate::model::post::{NewPost, Post, PostId, PostPatch};
use crate::model::user::UserId;
use crate::repo::constraint::translate_write_error;
use crate::repo::{ensure_table_ready, RecordKind, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const POST_COLUMNS: &[&str] = &[
    "id",
    "title",
    "content",
    "created_at",
    "updated_at",
    "last_updated",
    "author_id",
];

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    created_at,
    updated_at,
    last_updated,
    author_id
FROM posts";

/// Query options for listing posts. Filters compose with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListQuery {
    /// Exact owning-author match.
    pub author_id: Option<AuthorId>,
    /// Case-insensitive substring of the title.
    pub title_contains: Option<String>,
    /// Case-insensitive substring of the content.
    pub content_contains: Option<String>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Ownership chain of a post, used by the authorization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOwnership {
    pub author_id: AuthorId,
    /// User owning the post's author, if the author is linked to one.
    pub owner: Option<UserId>,
}

/// Repository interface for posts.
pub trait PostRepository {
    fn create_post(&self, post: &NewPost) -> RepoResult<Post>;
    /// Applies a patch; `None` fields keep their stored value.
    fn update_post(&self, id: PostId, patch: &PostPatch) -> RepoResult<Post>;
    /// Hard-deletes a post; comments go with it through the cascade.
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>>;
    fn post_ownership(&self, id: PostId) -> RepoResult<Option<PostOwnership>>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "posts", POST_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &NewPost) -> RepoResult<Post> {
        let now = now_epoch_ms();
        self.conn
            .execute(
                "INSERT INTO posts (
                    title,
                    content,
                    created_at,
                    updated_at,
                    last_updated,
                    author_id
                ) VALUES (?1, ?2, ?3, ?3, ?3, ?4);",
                params![post.title.as_str(), post.content.as_str(), now, post.author_id],
            )
            .map_err(|err| {
                translate_write_error(err, Some((RecordKind::Author, post.author_id)))
            })?;

        Ok(Post {
            id: self.conn.last_insert_rowid(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: now,
            updated_at: now,
            last_updated: now,
            author_id: post.author_id,
        })
    }

    fn update_post(&self, id: PostId, patch: &PostPatch) -> RepoResult<Post> {
        let changed = self
            .conn
            .execute(
                "UPDATE posts
                 SET
                    title = COALESCE(?2, title),
                    content = COALESCE(?3, content),
                    updated_at = ?4
                 WHERE id = ?1;",
                params![
                    id,
                    patch.title.as_deref(),
                    patch.content.as_deref(),
                    now_epoch_ms(),
                ],
            )
            .map_err(|err| translate_write_error(err, None))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: RecordKind::Post,
                id,
            });
        }

        self.get_post(id)?.ok_or(RepoError::NotFound {
            kind: RecordKind::Post,
            id,
        })
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM posts WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: RecordKind::Post,
                id,
            });
        }
        Ok(())
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let post = self
            .conn
            .query_row(
                &format!("{POST_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_post_row,
            )
            .optional()?;
        Ok(post)
    }

    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        let mut sql = format!("{POST_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(author_id) = query.author_id {
            sql.push_str(" AND author_id = ?");
            bind_values.push(Value::Integer(author_id));
        }

        if let Some(needle) = query.title_contains.as_ref() {
            sql.push_str(" AND instr(lower(title), lower(?)) > 0");
            bind_values.push(Value::Text(needle.clone()));
        }

        if let Some(needle) = query.content_contains.as_ref() {
            sql.push_str(" AND instr(lower(content), lower(?)) > 0");
            bind_values.push(Value::Text(needle.clone()));
        }

        sql.push_str(" ORDER BY id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }

        Ok(posts)
    }

    fn post_ownership(&self, id: PostId) -> RepoResult<Option<PostOwnership>> {
        let ownership = self
            .conn
            .query_row(
                "SELECT p.author_id, a.user_id
                 FROM posts p
                 INNER JOIN authors a ON a.id = p.author_id
                 WHERE p.id = ?1;",
                [id],
                |row| {
                    Ok(PostOwnership {
                        author_id: row.get(0)?,
                        owner: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(ownership)
    }
}

fn parse_post_row(row: &Row<'_>) -> rusqlite::Result<Post> {
    Ok(Post {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        last_updated: row.get("last_updated")?,
        author_id: row.get("author_id")?,
    })
}
