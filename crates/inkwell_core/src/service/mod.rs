//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the blog's create/update/delete
//!   use-cases.
//! - Translate repository outcomes into the validation taxonomy
//!   (`ServiceError`), keeping storage details out of callers.
//!
//! # Invariants
//! - Validation failures are always distinct `ServiceError` variants, never
//!   the generic `Repo` variant.
//! - Services never check authorization; see `crate::auth`.

pub mod author_service;
pub mod comment_service;
pub mod error;
pub mod post_service;
pub mod user_service;
