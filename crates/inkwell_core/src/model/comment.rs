//! Comment model.

use crate::model::post::PostId;
use serde::{Deserialize, Serialize};

/// Store-assigned id of a comment.
pub type CommentId = i64;

/// Reply attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    /// Unix epoch milliseconds; immutable.
    pub created_at: i64,
    pub post_id: PostId,
}
