//! Owner of the in-memory session and its lifecycle operations.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use chairside_domain::{Credentials, PersistedSession, Session, User};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{AuthError, AuthGateway, SessionStore};

/// Coordinates login, logout and hydration between the in-memory session,
/// the credential exchange and the durable store.
///
/// One instance is created at the composition root and handed to whatever
/// needs session access; there is no process-global session.
///
/// Every login attempt runs under a generation number. `logout` and each new
/// `login` bump the generation, so an exchange that resolves late — after a
/// logout or after a newer attempt started — is detected as stale and its
/// result discarded rather than applied.
pub struct SessionManager<S, G> {
    session: RwLock<Session>,
    generation: AtomicU64,
    store: S,
    gateway: G,
}

impl<S: SessionStore, G: AuthGateway> SessionManager<S, G> {
    /// Creates a manager with an empty, unauthenticated session.
    pub fn new(store: S, gateway: G) -> Self {
        Self {
            session: RwLock::new(Session::new()),
            generation: AtomicU64::new(0),
            store,
            gateway,
        }
    }

    /// Rebuilds the in-memory session from the durable store.
    ///
    /// Returns true if a record was restored. Absent and corrupt records
    /// leave the session logged out; neither fails the startup path.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself cannot be read.
    pub async fn hydrate(&self) -> ApplicationResult<bool> {
        match self.store.load().await? {
            Some(record) => {
                info!(
                    user = %record.user.email,
                    saved_at = %record.saved_at,
                    "restoring persisted session"
                );
                self.session
                    .write()
                    .set_credentials(record.user, record.access_token);
                Ok(true)
            }
            None => {
                debug!("no persisted session to restore");
                Ok(false)
            }
        }
    }

    /// Runs the full login flow: local validation, token exchange, profile
    /// fetch, session transition, persistence.
    ///
    /// Malformed input is rejected before any network call and leaves the
    /// session untouched. A failed exchange marks the session `Failed` but
    /// retains previously established credentials. The durable record is
    /// written only after the in-memory transition to authenticated.
    ///
    /// # Errors
    ///
    /// Returns a validation error, the exchange's error, a store error if
    /// persistence fails, or [`ApplicationError::Superseded`] when a logout
    /// or newer login overtook this attempt and its response was discarded.
    pub async fn login(&self, credentials: &Credentials) -> ApplicationResult<User> {
        credentials.validate()?;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.session.write().begin_login();

        let outcome = self.exchange(credentials).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("discarding response from a superseded login attempt");
            return Err(ApplicationError::Superseded);
        }

        match outcome {
            Ok((user, access_token)) => {
                self.session
                    .write()
                    .complete_login(user.clone(), access_token.clone());
                self.store
                    .persist(&PersistedSession::new(access_token, user.clone()))
                    .await?;
                info!(user = %user.email, "login succeeded");
                Ok(user)
            }
            Err(err) => {
                self.session.write().fail_login(err.to_string());
                warn!(error = %err, "login failed");
                Err(ApplicationError::Auth(err))
            }
        }
    }

    /// Token first, profile second.
    async fn exchange(&self, credentials: &Credentials) -> Result<(User, String), AuthError> {
        let access_token = self.gateway.exchange_credentials(credentials).await?;
        let user = self.gateway.fetch_profile(&access_token).await?;
        Ok((user, access_token))
    }

    /// Ends the session in memory, then removes the durable record.
    ///
    /// Any login still in flight is superseded and its response will be
    /// discarded when it resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the durable record cannot be removed; the
    /// in-memory session is cleared regardless.
    pub async fn logout(&self) -> ApplicationResult<()> {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.session.write().clear();
        self.store.clear().await?;
        info!("session cleared");
        Ok(())
    }

    /// Clone of the current session for reads.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    /// Current bearer token, if authenticated.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.session.read().access_token.clone()
    }

    /// Returns true if the session currently holds credentials.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }
}
