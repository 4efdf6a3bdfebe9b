//! Wire shapes of the query/mutation surface.
//!
//! Argument and field names are camelCase on the wire.

use inkwell_core::{Author, Comment, Post, PostListQuery};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorNode {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
}

impl From<Author> for AuthorNode {
    fn from(value: Author) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            email: value.email,
            bio: value.bio,
        }
    }
}

/// Post with its owning author embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostNode {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub last_updated: i64,
    pub author: AuthorNode,
}

impl PostNode {
    pub(crate) fn new(post: Post, author: Author) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
            last_updated: post.last_updated,
            author: author.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub id: i64,
    pub content: String,
    pub created_at: i64,
    pub post_id: i64,
}

impl From<Comment> for CommentNode {
    fn from(value: Comment) -> Self {
        Self {
            id: value.id,
            content: value.content,
            created_at: value.created_at,
            post_id: value.post_id,
        }
    }
}

/// `{ author, errors }` mutation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorPayload {
    pub author: Option<AuthorNode>,
    pub errors: Vec<String>,
}

/// `{ post, errors }` mutation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPayload {
    pub post: Option<PostNode>,
    pub errors: Vec<String>,
}

/// `{ comment, errors }` mutation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentPayload {
    pub comment: Option<CommentNode>,
    pub errors: Vec<String>,
}

/// `{ success, errors }` result of `deletePost`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePayload {
    pub success: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAuthorInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAuthorInput {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub author_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdatePostInput {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IdInput {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCommentInput {
    pub content: String,
    pub post_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AllCommentsInput {
    pub post_id: i64,
}

/// Filters of `allPosts`; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AllPostsInput {
    pub author_id: Option<i64>,
    pub title_contains: Option<String>,
    pub content_contains: Option<String>,
    pub limit: Option<u32>,
    pub offset: u32,
}

impl From<AllPostsInput> for PostListQuery {
    fn from(value: AllPostsInput) -> Self {
        Self {
            author_id: value.author_id,
            title_contains: value.title_contains,
            content_contains: value.content_contains,
            limit: value.limit,
            offset: value.offset,
        }
    }
}
