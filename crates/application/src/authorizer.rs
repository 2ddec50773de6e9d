//! Bearer-credential request transform.

use chairside_domain::{AUTHORIZATION, ApiRequest, bearer_value};

/// Attaches the session's bearer credential to outgoing requests.
///
/// The transform is pure and synchronous: the token is resolved when the
/// authorizer is built (session first, then an optional fallback read from
/// the durable store before hydration finished) and `authorize` never
/// blocks or suspends. Requests pass through untouched when no token
/// exists, and a request that already carries an authorization header is
/// left alone.
///
/// The authorizer never reacts to responses: a 401 on a later call is the
/// caller's decision to handle.
#[derive(Debug, Clone, Default)]
pub struct RequestAuthorizer {
    token: Option<String>,
    fallback: Option<String>,
}

impl RequestAuthorizer {
    /// Authorizer holding the session's current token, if any.
    #[must_use]
    pub const fn new(token: Option<String>) -> Self {
        Self {
            token,
            fallback: None,
        }
    }

    /// Authorizer with no credential: every request passes through
    /// unchanged.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self::new(None)
    }

    /// Adds a fallback credential, consulted only when the session itself
    /// holds no token yet.
    #[must_use]
    pub fn with_fallback(mut self, token: Option<String>) -> Self {
        self.fallback = token;
        self
    }

    /// The credential that would be attached, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().or(self.fallback.as_deref())
    }

    /// Attaches `Authorization: Bearer <token>` when a credential exists.
    #[must_use]
    pub fn authorize(&self, request: ApiRequest) -> ApiRequest {
        if request.header(AUTHORIZATION).is_some() {
            return request;
        }
        match self.token() {
            Some(token) => request.with_header(AUTHORIZATION, bearer_value(token)),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn attaches_the_bearer_header() {
        let authorizer = RequestAuthorizer::new(Some("testtoken".to_string()));
        let request = authorizer.authorize(ApiRequest::get("/api/appointments"));
        assert_eq!(request.header(AUTHORIZATION), Some("Bearer testtoken"));
    }

    #[test]
    fn passes_through_without_a_token() {
        let request = RequestAuthorizer::anonymous().authorize(ApiRequest::get("/api/public"));
        assert_eq!(request.header(AUTHORIZATION), None);
        assert!(request.headers.is_empty());
    }

    #[test]
    fn falls_back_to_the_persisted_token() {
        let authorizer =
            RequestAuthorizer::new(None).with_fallback(Some("stored".to_string()));
        let request = authorizer.authorize(ApiRequest::get("/api/appointments"));
        assert_eq!(request.header(AUTHORIZATION), Some("Bearer stored"));
    }

    #[test]
    fn session_token_wins_over_the_fallback() {
        let authorizer = RequestAuthorizer::new(Some("live".to_string()))
            .with_fallback(Some("stored".to_string()));
        assert_eq!(authorizer.token(), Some("live"));
    }

    #[test]
    fn existing_authorization_header_is_untouched() {
        let authorizer = RequestAuthorizer::new(Some("live".to_string()));
        let request = ApiRequest::get("/api/auth/me").with_header(AUTHORIZATION, "Bearer explicit");
        let request = authorizer.authorize(request);
        assert_eq!(request.header(AUTHORIZATION), Some("Bearer explicit"));
        assert_eq!(request.headers.len(), 1);
    }
}
