//! Helpers shared by the backend's integration test binaries.
//!
//! Nothing in here depends on backend types, so the error-body assertions
//! check the wire contract rather than the Rust representation.

pub mod error_body;
pub mod logging;
pub mod unique_helpers;
