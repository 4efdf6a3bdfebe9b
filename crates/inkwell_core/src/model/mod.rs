//! Blog domain model.
//!
//! # Responsibility
//! - Define the records persisted by the blog store.
//! - Define create/patch inputs consumed by the service layer.
//!
//! # Invariants
//! - Every record is identified by a store-assigned integer id.
//! - Timestamps are Unix epoch milliseconds assigned by the repository layer.
//! - Ownership chain is User -> Author -> Post -> Comment, cascading on delete.

pub mod author;
pub mod comment;
pub mod post;
pub mod user;

/// Treats blank optional text as "not provided".
///
/// Patch inputs use this so that `Some("")` leaves a field unchanged.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
