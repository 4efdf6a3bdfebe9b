//! Request-level faults of the query/mutation surface.
//!
//! Validation failures never appear here; they travel in-band inside
//! mutation payloads. Everything in this module aborts the whole request.

use inkwell_core::{AuthError, RepoError, ServiceError};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Caller is not authenticated.
    Unauthorized(String),
    /// Caller is authenticated but does not own the target.
    Forbidden(String),
    /// Single-record lookup found nothing.
    NotFound(String),
    /// Unknown operation or malformed arguments.
    BadRequest(String),
    /// Store or invariant failure.
    Internal(String),
}

impl ApiError {
    /// Stable machine-readable code for the fault.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Internal(message) => message,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::Unauthorized { .. } => Self::Unauthorized(value.to_string()),
            AuthError::Forbidden { .. } => Self::Forbidden(value.to_string()),
            AuthError::Lookup(err) => err.into(),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        Self::Internal(value.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::BadRequest(value.to_string())
    }
}

/// Splits a service error into its in-band message or a request-level fault.
pub(crate) fn in_band_message(err: ServiceError) -> ApiResult<String> {
    if err.is_validation() {
        Ok(err.to_string())
    } else {
        Err(ApiError::Internal(err.to_string()))
    }
}

/// Serialized form of a request-level fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFault {
    pub code: &'static str,
    pub message: String,
}

impl From<&ApiError> for ApiFault {
    fn from(value: &ApiError) -> Self {
        Self {
            code: value.code(),
            message: value.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{in_band_message, ApiError};
    use inkwell_core::{AuthError, RecordKind, RepoError, ServiceError};

    #[test]
    fn auth_errors_keep_their_kind_and_message() {
        let err = ApiError::from(AuthError::Forbidden {
            action: "delete this post",
        });
        assert_eq!(err.code(), "FORBIDDEN");
        assert_eq!(err.message(), "You are not allowed to delete this post.");

        let err = ApiError::from(AuthError::Unauthorized {
            action: "create a comment",
        });
        assert_eq!(err.code(), "UNAUTHORIZED");
    }

    #[test]
    fn only_validation_errors_travel_in_band() {
        assert_eq!(
            in_band_message(ServiceError::DuplicateTitle).unwrap(),
            "A post with this title already exists."
        );
        let fault = in_band_message(ServiceError::Repo(RepoError::NotFound {
            kind: RecordKind::Comment,
            id: 1,
        }))
        .unwrap_err();
        assert_eq!(fault.code(), "INTERNAL");
    }
}
