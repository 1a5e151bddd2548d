//! API handlers
//!
//! This module contains the API endpoint handlers. Each handler follows
//! a consistent pattern:
//! - Extract state and parameters using Axum extractors
//! - Call the appropriate service methods
//! - Map the result to a response, with absent records becoming 404s

pub mod account;
