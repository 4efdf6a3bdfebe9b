//! Post model.
//!
//! # Invariants
//! - `title` is unique across all posts (store-level constraint).
//! - `created_at` never changes after insert.
//! - `updated_at` moves on every write to the row.
//! - `last_updated` is set at creation and reset to a comment's
//!   `created_at` whenever a comment is added.

use crate::model::author::AuthorId;
use crate::model::non_blank;
use serde::{Deserialize, Serialize};

/// Store-assigned id of a post.
pub type PostId = i64;

/// Titled content item owned by exactly one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Unique across all posts.
    pub title: String,
    pub content: String,
    /// Unix epoch milliseconds; immutable.
    pub created_at: i64,
    /// Moves on every write to the row.
    pub updated_at: i64,
    /// Creation time, then the `created_at` of the newest comment.
    pub last_updated: i64,
    pub author_id: AuthorId,
}

/// Input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: AuthorId,
}

/// Partial post update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    /// Drops empty-string fields so they are treated as not provided.
    pub fn normalized(self) -> Self {
        Self {
            title: non_blank(self.title),
            content: non_blank(self.content),
        }
    }
}
