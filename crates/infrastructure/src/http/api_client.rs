//! Reqwest adapter for the portal API.

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;
use url::Url;

use chairside_application::ports::{ApiClient, ApiError};
use chairside_domain::{ApiMethod, ApiRequest, ApiResponse};

use super::default_client;

/// HTTP client executing [`ApiRequest`]s against the portal API.
pub struct ReqwestApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestApiClient {
    /// Creates a client for the API below `base_url` with the portal's
    /// default transport settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Ok(Self {
            client: default_client()?,
            base_url,
        })
    }

    /// Reuses an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    const fn to_reqwest_method(method: ApiMethod) -> Method {
        match method {
            ApiMethod::Get => Method::GET,
            ApiMethod::Post => Method::POST,
            ApiMethod::Put => Method::PUT,
            ApiMethod::Delete => Method::DELETE,
        }
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self
            .base_url
            .join(request.path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidRequest {
                message: format!("invalid path {}: {e}", request.path),
            })?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);
        for header in &request.headers {
            builder = builder.header(&header.name, &header.value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        debug!(
            id = %request.id,
            method = %request.method,
            path = %request.path,
            "executing api request"
        );

        let response = builder.send().await.map_err(|e| ApiError::Network {
            message: e.to_string(),
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ApiError::Network {
            message: e.to_string(),
        })?;

        Ok(ApiResponse { status, body })
    }
}
