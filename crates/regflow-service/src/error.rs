//! # Service Error Taxonomy
//!
//! Maps domain and store failures into the four caller-facing kinds.
//! Validation and not-found errors are deterministic and carry enough
//! detail to render a user message; store backend failures are logged
//! with context at the call site and surfaced without internals.

use thiserror::Error;

use regflow_state::LifecycleError;
use regflow_store::StoreError;

/// Caller-facing error for the approval operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Referenced document or user is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing required field or invalid state for the requested transition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Role check failed.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Underlying store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<LifecycleError> for ServiceError {
    fn from(err: LifecycleError) -> Self {
        // Illegal transitions are invalid-state requests from the
        // caller's point of view, not internal failures.
        Self::Validation(err.to_string())
    }
}
