//! Reqwest-backed HTTP adapters.

mod api_client;
mod auth_gateway;

use std::time::Duration;

use chairside_application::ports::ApiError;

pub use api_client::ReqwestApiClient;
pub use auth_gateway::HttpAuthGateway;

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// User agent presented to the portal API.
const USER_AGENT: &str = concat!("chairside/", env!("CARGO_PKG_VERSION"));

/// Builds the shared reqwest client with portal defaults: 30 second
/// timeout, limited redirects, portal user agent.
///
/// # Errors
///
/// Returns an error if the underlying client cannot be constructed.
pub fn default_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ApiError::InvalidRequest {
            message: e.to_string(),
        })
}
