//! Author use-case service.
//!
//! # Invariants
//! - Author emails are unique; collisions surface as `DuplicateEmail`.
//! - Empty-string patch fields leave the stored value unchanged.

use crate::model::author::{Author, AuthorId, AuthorPatch, NewAuthor};
use crate::model::non_blank;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::RepoResult;
use crate::service::error::ServiceResult;

/// Service facade for author profiles.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an author, optionally linked to an owning user.
    ///
    /// # Errors
    /// - `DuplicateEmail` when another author already uses `email`.
    /// - `UserNotFound` when `user_id` references no user.
    pub fn create_author(&self, author: NewAuthor) -> ServiceResult<Author> {
        let author = NewAuthor {
            bio: non_blank(author.bio),
            ..author
        };
        Ok(self.repo.create_author(&author)?)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    /// - `AuthorNotFound` when `id` does not exist.
    /// - `DuplicateEmail` when a *different* author already uses the email.
    pub fn update_author(&self, id: AuthorId, patch: AuthorPatch) -> ServiceResult<Author> {
        Ok(self.repo.update_author(id, &patch.normalized())?)
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }
}
