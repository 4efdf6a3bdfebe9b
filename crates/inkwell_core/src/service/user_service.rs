//! User account use-case service.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;
use crate::service::error::{ServiceError, ServiceResult};

/// Service facade for provisioning login accounts.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a user with a trimmed, non-blank, unique username.
    pub fn create_user(&self, username: &str) -> ServiceResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ServiceError::BlankField("username"));
        }
        Ok(self.repo.create_user(username)?)
    }

    pub fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        self.repo.get_user(id)
    }

    /// Deletes a user together with its authors, their posts and comments.
    pub fn delete_user(&self, id: UserId) -> ServiceResult<bool> {
        self.repo.delete_user(id)?;
        Ok(true)
    }
}
