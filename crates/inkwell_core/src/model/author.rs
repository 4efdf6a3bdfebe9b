//! Author profile model.
//!
//! # Invariants
//! - `email` is unique across all authors (store-level constraint).
//! - Deleting the owning user deletes the author and everything it owns.

use crate::model::non_blank;
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};

/// Store-assigned id of an author profile.
pub type AuthorId = i64;

/// Content-creator profile owning zero or more posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    /// Owning login account. `None` means nobody can act on its posts.
    pub user_id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
}

/// Input for creating an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub user_id: Option<UserId>,
}

/// Partial author update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

impl AuthorPatch {
    /// Drops empty-string fields so they are treated as not provided.
    pub fn normalized(self) -> Self {
        Self {
            name: non_blank(self.name),
            email: non_blank(self.email),
            bio: non_blank(self.bio),
        }
    }
}
