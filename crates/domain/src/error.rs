//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The supplied email address is not well formed.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The supplied password is shorter than the accepted minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// A role name is not part of the closed role set.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A route path is empty or not absolute.
    #[error("invalid route path: {0:?}")]
    InvalidRoutePath(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
