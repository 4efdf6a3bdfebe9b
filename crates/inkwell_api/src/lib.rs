//! Query/mutation surface for the Inkwell blogging backend.
//!
//! # Responsibility
//! - Translate named operations into authorization checks and service calls.
//! - Keep validation failures in-band and authorization failures out-of-band.
//!
//! # Invariants
//! - No business rule lives here; `inkwell_core` owns every invariant.

pub mod api;
pub mod config;
pub mod error;
pub mod request;
pub mod types;

pub use api::BlogApi;
pub use config::ApiConfig;
pub use error::{ApiError, ApiFault, ApiResult};
pub use request::{ApiRequest, ApiResponse};
