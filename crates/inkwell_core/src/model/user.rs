//! Login account model.
//!
//! Users are provisioned out of band and only referenced by authors as their
//! owning identity.

use serde::{Deserialize, Serialize};

/// Store-assigned id of a login account.
pub type UserId = i64;

/// Login account that may own authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}
