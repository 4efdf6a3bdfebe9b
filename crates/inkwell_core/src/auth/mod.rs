//! Request authorization layer.
//!
//! # Responsibility
//! - Represent the resolved identity of a request (`Caller`).
//! - Reject mutations from anonymous callers and from callers that do not
//!   own the targeted post or author.
//!
//! # Invariants
//! - Checks are stateless and run before any service call, so a rejected
//!   request never mutates the store.
//! - Authorization failures are a separate taxonomy from validation errors
//!   and must never be reported in-band.
//! - A missing target passes the ownership check; the service layer then
//!   reports it as a validation error.

use crate::model::user::UserId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod guard;

pub use guard::{require_author_owner, require_authenticated, require_post_owner};

pub type AuthResult<T> = Result<T, AuthError>;

/// Resolved identity of the requester.
///
/// Session or token handling happens outside this crate; callers hand in the
/// outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Caller {
    #[default]
    Anonymous,
    User(UserId),
}

impl Caller {
    pub fn user_id(self) -> Option<UserId> {
        match self {
            Self::Anonymous => None,
            Self::User(id) => Some(id),
        }
    }

    pub fn is_authenticated(self) -> bool {
        self.user_id().is_some()
    }
}

impl From<Option<UserId>> for Caller {
    fn from(value: Option<UserId>) -> Self {
        value.map_or(Self::Anonymous, Self::User)
    }
}

/// Access-control rejection.
#[derive(Debug)]
pub enum AuthError {
    /// Caller is anonymous.
    Unauthorized { action: &'static str },
    /// Caller is authenticated but does not own the target.
    Forbidden { action: &'static str },
    /// Ownership lookup failed in the store.
    Lookup(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { action } => write!(f, "You must be logged in to {action}."),
            Self::Forbidden { action } => write!(f, "You are not allowed to {action}."),
            Self::Lookup(err) => write!(f, "authorization lookup failed: {err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lookup(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthError, Caller};

    #[test]
    fn caller_from_optional_user_id() {
        assert_eq!(Caller::from(None), Caller::Anonymous);
        assert_eq!(Caller::from(Some(3)), Caller::User(3));
        assert!(!Caller::default().is_authenticated());
        assert_eq!(Caller::User(3).user_id(), Some(3));
    }

    #[test]
    fn messages_name_the_action() {
        let err = AuthError::Unauthorized {
            action: "delete a post",
        };
        assert_eq!(err.to_string(), "You must be logged in to delete a post.");
        let err = AuthError::Forbidden {
            action: "delete this post",
        };
        assert_eq!(err.to_string(), "You are not allowed to delete this post.");
    }
}
