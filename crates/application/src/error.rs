//! Application error types

use thiserror::Error;

use chairside_domain::DomainError;

use crate::ports::{ApiError, AuthError, SessionStoreError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Credential validation failed before any network call.
    #[error("validation error: {0}")]
    Validation(#[from] DomainError),

    /// The credential exchange failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The durable session store failed.
    #[error("session store error: {0}")]
    Store(#[from] SessionStoreError),

    /// An API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A newer login or a logout superseded this operation; its result was
    /// discarded.
    #[error("operation superseded")]
    Superseded,
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
