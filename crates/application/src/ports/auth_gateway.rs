//! Credential-exchange port.

use async_trait::async_trait;
use thiserror::Error;

use chairside_domain::{Credentials, User};

/// Fallback message when a rejection carries no usable detail.
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed";

/// Errors surfaced by the credential exchange.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The server rejected the exchange. The message is extracted from the
    /// response body when present, otherwise [`GENERIC_LOGIN_FAILURE`].
    #[error("{message}")]
    Rejected {
        /// Human-readable rejection message.
        message: String,
    },

    /// The transport failed before a response arrived.
    #[error("network error: {message}")]
    Network {
        /// Transport-level failure description.
        message: String,
    },

    /// The server answered successfully with a body that could not be
    /// decoded.
    #[error("malformed response: {message}")]
    MalformedResponse {
        /// Decoding failure description.
        message: String,
    },
}

/// Port for the two-step credential exchange against the auth API: token
/// first, profile second.
///
/// Implementations never retry on their own. A failed exchange has no
/// server-side effect and is safe for the caller to submit again.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges an email/password pair for an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails, the server rejects the
    /// credentials, or the response cannot be decoded.
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<String, AuthError>;

    /// Fetches the profile that `access_token` belongs to, presenting the
    /// token as a bearer credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails, the token is rejected, or
    /// the profile cannot be decoded.
    async fn fetch_profile(&self, access_token: &str) -> Result<User, AuthError>;
}
