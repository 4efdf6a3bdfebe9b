//! Core domain logic for the Inkwell blogging backend.
//! This crate is the single source of truth for business invariants:
//! store schema, validation, authorization, and the comment side effect.

pub mod auth;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use auth::{AuthError, AuthResult, Caller};
pub use logging::{init_logging, logging_status, LogLevel};
pub use model::author::{Author, AuthorId, AuthorPatch, NewAuthor};
pub use model::comment::{Comment, CommentId};
pub use model::post::{NewPost, Post, PostId, PostPatch};
pub use model::user::{User, UserId};
pub use repo::author_repo::{AuthorRepository, SqliteAuthorRepository};
pub use repo::comment_repo::{CommentRepository, SqliteCommentRepository};
pub use repo::post_repo::{PostListQuery, PostOwnership, PostRepository, SqlitePostRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RecordKind, RepoError, RepoResult};
pub use service::author_service::AuthorService;
pub use service::comment_service::CommentService;
pub use service::error::{ServiceError, ServiceResult};
pub use service::post_service::PostService;
pub use service::user_service::UserService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
