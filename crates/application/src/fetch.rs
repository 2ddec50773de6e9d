//! Generic request/response wrapper for feature views.
//!
//! Feature views hold one [`DataFetch`] per request they issue and render
//! from its state after each dispatch. Requests go through the
//! [`RequestAuthorizer`] so every API call carries the session credential
//! when one exists.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use chairside_domain::{ApiRequest, FetchState};

use crate::authorizer::RequestAuthorizer;
use crate::ports::ApiClient;

/// Error payload the portal API attaches to failed calls.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Best-effort extraction of a human-readable message from a failed
/// response, falling back to the status code.
fn failure_message(body: &str, status: u16) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map_or_else(|_| format!("request failed with status {status}"), |b| b.message)
}

/// A reusable loading/data/error wrapper around one API call.
#[derive(Debug)]
pub struct DataFetch<T> {
    state: FetchState<T>,
}

impl<T: DeserializeOwned> DataFetch<T> {
    /// Creates an idle fetch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: FetchState::Idle,
        }
    }

    /// Current observable state.
    #[must_use]
    pub const fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Consumes the fetch, yielding its final state.
    #[must_use]
    pub fn into_state(self) -> FetchState<T> {
        self.state
    }

    /// Executes `request` through `client`, attaching the session
    /// credential via `authorizer`, and settles into `Success` or `Error`.
    ///
    /// Authorization failures on the response (401) become ordinary fetch
    /// errors; forcing a logout is the caller's decision.
    pub async fn dispatch<C: ApiClient>(
        &mut self,
        client: &C,
        authorizer: &RequestAuthorizer,
        request: ApiRequest,
    ) -> &FetchState<T> {
        self.state = FetchState::Loading;
        let request = authorizer.authorize(request);
        debug!(
            id = %request.id,
            method = %request.method,
            path = %request.path,
            "dispatching api request"
        );

        self.state = match client.execute(&request).await {
            Ok(response) if response.is_success() => match response.json::<T>() {
                Ok(data) => FetchState::success(data),
                Err(err) => FetchState::error(format!("invalid response body: {err}")),
            },
            Ok(response) => FetchState::error(failure_message(&response.body, response.status)),
            Err(err) => FetchState::error(err.to_string()),
        };
        &self.state
    }
}

impl<T: DeserializeOwned> Default for DataFetch<T> {
    fn default() -> Self {
        Self::new()
    }
}
