//! Service-level error taxonomy.

use crate::model::author::AuthorId;
use crate::model::post::PostId;
use crate::model::user::UserId;
use crate::repo::{RecordKind, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error returned by service use-cases.
///
/// Every variant except `Repo` is a validation error: a recoverable
/// precondition failure whose `Display` text is shown to API callers.
#[derive(Debug)]
pub enum ServiceError {
    /// Required text input is empty after trimming.
    BlankField(&'static str),
    DuplicateUsername,
    DuplicateEmail,
    DuplicateTitle,
    UserNotFound(UserId),
    AuthorNotFound(AuthorId),
    PostNotFound(PostId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl ServiceError {
    /// Returns whether this error belongs to the in-band validation taxonomy.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Repo(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "The {field} must not be blank."),
            Self::DuplicateUsername => write!(f, "A user with this username already exists."),
            Self::DuplicateEmail => write!(f, "An author with this email already exists."),
            Self::DuplicateTitle => write!(f, "A post with this title already exists."),
            Self::UserNotFound(_) => write!(f, "User not found."),
            Self::AuthorNotFound(_) => write!(f, "Author not found."),
            Self::PostNotFound(_) => write!(f, "Post not found."),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::UniqueViolation { table, column } => {
                match (table.as_str(), column.as_str()) {
                    ("users", "username") => Self::DuplicateUsername,
                    ("authors", "email") => Self::DuplicateEmail,
                    ("posts", "title") => Self::DuplicateTitle,
                    _ => Self::Repo(RepoError::UniqueViolation { table, column }),
                }
            }
            RepoError::NotFound { kind, id } | RepoError::MissingParent { kind, id } => match kind
            {
                RecordKind::User => Self::UserNotFound(id),
                RecordKind::Author => Self::AuthorNotFound(id),
                RecordKind::Post => Self::PostNotFound(id),
                RecordKind::Comment => Self::Repo(RepoError::NotFound { kind, id }),
            },
            other => Self::Repo(other),
        }
    }
}
