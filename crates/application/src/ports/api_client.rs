//! API transport port.

use async_trait::async_trait;
use thiserror::Error;

use chairside_domain::{ApiRequest, ApiResponse};

/// Errors surfaced by the API transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The transport failed before a response arrived.
    #[error("network error: {message}")]
    Network {
        /// Transport-level failure description.
        message: String,
    },

    /// The request could not be constructed.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Construction failure description.
        message: String,
    },
}

/// Port for executing portal API requests.
///
/// Non-2xx statuses are NOT transport errors: they come back as an
/// [`ApiResponse`] so callers can read the body's error message.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Executes a request and returns whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is malformed or the transport fails.
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}
