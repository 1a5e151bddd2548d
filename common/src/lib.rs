//! Common types and utilities for the account service
//!
//! This library contains the shared domain model, error handling, and
//! decimal helpers used by the account store and the HTTP gateway. It
//! provides a unified approach to error propagation across the service
//! boundary.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
