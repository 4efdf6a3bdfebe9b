//! Comment use-case service.
//!
//! Creating a comment also stamps the parent post's `last_updated` with the
//! comment's creation time, atomically with the insert.

use crate::model::comment::Comment;
use crate::model::post::PostId;
use crate::repo::comment_repo::CommentRepository;
use crate::repo::RepoResult;
use crate::service::error::ServiceResult;

/// Service facade for comments.
pub struct CommentService<R: CommentRepository> {
    repo: R,
}

impl<R: CommentRepository> CommentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a comment to a post.
    ///
    /// # Errors
    /// - `PostNotFound` when the post does not exist; nothing is written.
    pub fn create_comment(&self, post_id: PostId, content: &str) -> ServiceResult<Comment> {
        Ok(self.repo.create_comment(post_id, content)?)
    }

    /// Lists comments of a post; unknown posts yield an empty list.
    pub fn list_comments(&self, post_id: PostId) -> RepoResult<Vec<Comment>> {
        self.repo.list_comments(post_id)
    }
}
