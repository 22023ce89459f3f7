//! # Error Types — Core Validation Failures
//!
//! Defines the error type shared by the foundational constructors. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Validation errors name the violating field and the expected format.
//! - Lifecycle and store errors live in their own crates; this type only
//!   covers the leaf primitives (timestamps, reference numbers, status
//!   strings deserialized from storage).

use thiserror::Error;

/// Error type for the foundational regflow primitives.
#[derive(Error, Debug)]
pub enum RegflowError {
    /// A value failed format or range validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RegflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
