//! Shared primitives for all Rust crates in Stafflink.

#![forbid(unsafe_code)]

/// Caller identity primitives shared across services.
pub mod auth;

use thiserror::Error;

pub use auth::ActorIdentity;

/// Result type used across Stafflink crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The external identity provider is unreachable or returned an error.
    #[error("upstream identity provider error: {0}")]
    Upstream(String),

    /// Caller identity is missing or could not be established.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Caller is authenticated but blocked by the role gate.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal unexpected error, including persistence failures.
    #[error("internal error: {0}")]
    Internal(String),
}
