//! Reqwest-backed credential exchange.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use chairside_application::ports::{AuthError, AuthGateway, GENERIC_LOGIN_FAILURE};
use chairside_domain::{AUTHORIZATION, Credentials, User, bearer_value};

/// Login endpoint, relative to the API base.
const LOGIN_ENDPOINT: &str = "api/auth/login";

/// Profile endpoint, relative to the API base.
const PROFILE_ENDPOINT: &str = "api/auth/me";

/// Successful token response from the login endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
}

/// Error payload the API attaches to rejections.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Credential exchange against the portal's auth API.
pub struct HttpAuthGateway {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpAuthGateway {
    /// Creates a gateway for the auth API below `base_url`. The base must
    /// end with a slash for endpoint paths to join below it.
    #[must_use]
    pub const fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        self.base_url.join(path).map_err(|e| AuthError::Network {
            message: format!("invalid endpoint {path}: {e}"),
        })
    }
}

/// Extracts the server's rejection message, falling back to the generic
/// login failure string.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map_or_else(|_| GENERIC_LOGIN_FAILURE.to_string(), |e| e.message)
}

fn transport_error(err: &reqwest::Error) -> AuthError {
    AuthError::Network {
        message: err.to_string(),
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn exchange_credentials(&self, credentials: &Credentials) -> Result<String, AuthError> {
        let url = self.endpoint(LOGIN_ENDPOINT)?;
        debug!(email = %credentials.email, "posting credentials");

        let response = self
            .client
            .post(url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| transport_error(&e))?;
        if !status.is_success() {
            return Err(AuthError::Rejected {
                message: rejection_message(&body),
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::MalformedResponse {
                message: e.to_string(),
            })?;
        Ok(token.access_token)
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<User, AuthError> {
        let url = self.endpoint(PROFILE_ENDPOINT)?;
        debug!("fetching profile for the exchanged token");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, bearer_value(access_token))
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| transport_error(&e))?;
        if !status.is_success() {
            return Err(AuthError::Rejected {
                message: rejection_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| AuthError::MalformedResponse {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use chairside_domain::Role;

    use super::*;

    async fn gateway(server: &MockServer) -> HttpAuthGateway {
        let base = Url::parse(&format!("{}/", server.uri())).unwrap();
        HttpAuthGateway::new(reqwest::Client::new(), base)
    }

    fn credentials() -> Credentials {
        Credentials::new("test@example.com", "password")
    }

    #[tokio::test]
    async fn exchanges_credentials_for_a_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(
                serde_json::json!({"email": "test@example.com", "password": "password"}),
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "accessToken": "token123"
                })),
            )
            .mount(&server)
            .await;

        let token = gateway(&server)
            .await
            .exchange_credentials(&credentials())
            .await
            .unwrap();
        assert_eq!(token, "token123");
    }

    #[tokio::test]
    async fn rejection_carries_the_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"message": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let err = gateway(&server)
            .await
            .exchange_credentials(&credentials())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AuthError::Rejected {
                message: "Invalid credentials".to_string()
            }
        );
    }

    #[tokio::test]
    async fn rejection_without_a_message_uses_the_generic_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .await
            .exchange_credentials(&credentials())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AuthError::Rejected {
                message: GENERIC_LOGIN_FAILURE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn undecodable_token_response_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .await
            .exchange_credentials(&credentials())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn profile_fetch_presents_the_bearer_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("Authorization", "Bearer token123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "1",
                "name": "Test",
                "email": "test@example.com",
                "roles": ["Admin"]
            })))
            .mount(&server)
            .await;

        let user = gateway(&server)
            .await
            .fetch_profile("token123")
            .await
            .unwrap();
        assert_eq!(user.name, "Test");
        assert!(user.roles.contains(&Role::Admin));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        // Port 9 (discard) refuses connections.
        let base = Url::parse("http://127.0.0.1:9/").unwrap();
        let gateway = HttpAuthGateway::new(reqwest::Client::new(), base);
        let err = gateway
            .exchange_credentials(&credentials())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Network { .. }));
    }
}
