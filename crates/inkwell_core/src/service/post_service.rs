//! Post use-case service.
//!
//! # Invariants
//! - Post titles are unique; collisions surface as `DuplicateTitle`.
//! - Empty-string patch fields and list filters count as absent.

use crate::model::non_blank;
use crate::model::post::{NewPost, Post, PostId, PostPatch};
use crate::repo::post_repo::{PostListQuery, PostRepository};
use crate::repo::RepoResult;
use crate::service::error::{ServiceError, ServiceResult};

/// Service facade for posts.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a post owned by `post.author_id`.
    ///
    /// # Errors
    /// - `DuplicateTitle` when any post already uses the title.
    /// - `AuthorNotFound` when the author does not exist.
    pub fn create_post(&self, post: NewPost) -> ServiceResult<Post> {
        Ok(self.repo.create_post(&post)?)
    }

    /// Applies a partial update. Re-submitting the post's own title is allowed.
    ///
    /// # Errors
    /// - `PostNotFound` when `id` does not exist.
    /// - `DuplicateTitle` when a *different* post already uses the title.
    pub fn update_post(&self, id: PostId, patch: PostPatch) -> ServiceResult<Post> {
        Ok(self.repo.update_post(id, &patch.normalized())?)
    }

    /// Deletes a post and, through the cascade, its comments.
    pub fn delete_post(&self, id: PostId) -> ServiceResult<bool> {
        self.repo.delete_post(id)?;
        Ok(true)
    }

    /// Gets one post, failing with `PostNotFound` when absent.
    pub fn get_post(&self, id: PostId) -> ServiceResult<Post> {
        self.repo.get_post(id)?.ok_or(ServiceError::PostNotFound(id))
    }

    /// Lists posts matching every provided filter.
    pub fn list_posts(&self, query: PostListQuery) -> RepoResult<Vec<Post>> {
        let query = PostListQuery {
            title_contains: non_blank(query.title_contains),
            content_contains: non_blank(query.content_contains),
            ..query
        };
        self.repo.list_posts(&query)
    }
}
