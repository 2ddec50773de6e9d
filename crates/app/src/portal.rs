//! Portal facade: the wired session core plus route authorization.

use tracing::info;

use chairside_application::routing::{self, RouteDecision};
use chairside_application::{ApplicationResult, RequestAuthorizer, SessionManager};
use chairside_domain::{Credentials, RouteSpec, Session, User};
use chairside_infrastructure::{
    FileSessionStore, HttpAuthGateway, PortalConfig, ReqwestApiClient, TokioFileSystem,
    default_client,
};

use crate::routes::clinic_routes;

/// The session manager as wired by this composition root.
pub type PortalSessionManager = SessionManager<FileSessionStore<TokioFileSystem>, HttpAuthGateway>;

/// The wired portal core.
///
/// Owns the one `SessionManager` instance for the application's lifetime;
/// everything that needs session access goes through this object rather
/// than ambient globals.
pub struct Portal {
    session: PortalSessionManager,
    api: ReqwestApiClient,
    routes: Vec<RouteSpec>,
}

impl Portal {
    /// Builds all adapters from `config` and hydrates the session from the
    /// durable store before anything else runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built, the route table
    /// is malformed, or the session store cannot be read.
    pub async fn open(config: PortalConfig) -> ApplicationResult<Self> {
        let client = default_client()?;
        let store = FileSessionStore::new(TokioFileSystem::new(), config.data_dir.clone());
        let gateway = HttpAuthGateway::new(client.clone(), config.api_base_url.clone());
        let api = ReqwestApiClient::with_client(client, config.api_base_url.clone());

        let session = SessionManager::new(store, gateway);
        let restored = session.hydrate().await?;
        info!(
            api = %config.api_base_url,
            restored_session = restored,
            "portal opened"
        );

        Ok(Self {
            session,
            api,
            routes: clinic_routes()?,
        })
    }

    /// Logs in with `credentials`; see [`SessionManager::login`].
    ///
    /// # Errors
    ///
    /// Propagates validation, exchange and persistence errors.
    pub async fn login(&self, credentials: &Credentials) -> ApplicationResult<User> {
        self.session.login(credentials).await
    }

    /// Ends the session and clears the durable record.
    ///
    /// # Errors
    ///
    /// Propagates store errors; the in-memory session is cleared regardless.
    pub async fn logout(&self) -> ApplicationResult<()> {
        self.session.logout().await
    }

    /// Clone of the current session state.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session.snapshot()
    }

    /// The session manager itself, for callers that hold their own handle.
    #[must_use]
    pub const fn session_manager(&self) -> &PortalSessionManager {
        &self.session
    }

    /// The guarded route table.
    #[must_use]
    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    /// Evaluates the navigation gates for `path`.
    ///
    /// Paths outside the route table are presence-gated only.
    #[must_use]
    pub fn authorize_route(&self, path: &str) -> RouteDecision {
        let session = self.session.snapshot();
        self.routes.iter().find(|route| route.path == path).map_or_else(
            || routing::presence_gate(&session),
            |route| routing::evaluate(&session, route),
        )
    }

    /// Authorizer carrying the current session credential, for issuing API
    /// requests.
    #[must_use]
    pub fn request_authorizer(&self) -> RequestAuthorizer {
        RequestAuthorizer::new(self.session.access_token())
    }

    /// The API transport feature views dispatch through.
    #[must_use]
    pub const fn api(&self) -> &ReqwestApiClient {
        &self.api
    }
}
