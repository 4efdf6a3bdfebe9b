//! Authorization checks run in front of service calls.

use super::{AuthError, AuthResult, Caller};
use crate::model::author::AuthorId;
use crate::model::post::PostId;
use crate::model::user::UserId;
use crate::repo::author_repo::AuthorRepository;
use crate::repo::post_repo::PostRepository;
use log::warn;

/// Requires an authenticated caller and returns its user id.
pub fn require_authenticated(caller: Caller, action: &'static str) -> AuthResult<UserId> {
    caller.user_id().ok_or_else(|| {
        warn!("event=auth_denied module=auth status=error reason=unauthenticated action=\"{action}\"");
        AuthError::Unauthorized { action }
    })
}

/// Requires that the caller owns the author that owns `post_id`.
///
/// An unknown post passes so that the service layer can report it in-band.
pub fn require_post_owner<R: PostRepository>(
    caller: Caller,
    posts: &R,
    post_id: PostId,
    action: &'static str,
) -> AuthResult<UserId> {
    let user_id = require_authenticated(caller, action)?;
    match posts.post_ownership(post_id).map_err(AuthError::Lookup)? {
        Some(ownership) if ownership.owner != Some(user_id) => {
            warn!(
                "event=auth_denied module=auth status=error reason=not_owner user_id={user_id} post_id={post_id} author_id={}",
                ownership.author_id
            );
            Err(AuthError::Forbidden { action })
        }
        _ => Ok(user_id),
    }
}

/// Requires that the caller owns `author_id`.
///
/// An unknown author passes so that the service layer can report it in-band.
pub fn require_author_owner<R: AuthorRepository>(
    caller: Caller,
    authors: &R,
    author_id: AuthorId,
    action: &'static str,
) -> AuthResult<UserId> {
    let user_id = require_authenticated(caller, action)?;
    match authors.get_author(author_id).map_err(AuthError::Lookup)? {
        Some(author) if author.user_id != Some(user_id) => {
            warn!(
                "event=auth_denied module=auth status=error reason=not_owner user_id={user_id} author_id={author_id}"
            );
            Err(AuthError::Forbidden { action })
        }
        _ => Ok(user_id),
    }
}
