//! Session state machine and its durable record.
//!
//! The session has two orthogonal axes: the login-flow status
//! (`Idle`/`Loading`/`Failed`) and whether credentials are present. A failed
//! login moves the status axis without destroying previously established
//! credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// Login-flow status axis of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// No login is in flight.
    #[default]
    Idle,
    /// A credential exchange is in flight.
    Loading,
    /// The last login attempt failed.
    Failed,
}

/// In-memory authoritative session state.
///
/// Mutated only through the transition methods below; the identity fields
/// (`user`, `access_token`) always move together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user, if any.
    pub user: Option<User>,
    /// Bearer credential for API calls, if any.
    pub access_token: Option<String>,
    /// Login-flow status.
    pub status: SessionStatus,
    /// Message from the last failed login attempt.
    pub error: Option<String>,
}

impl Session {
    /// Fresh unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a successful login has occurred and no logout since.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Login submitted: status moves to `Loading`, the previous error is
    /// cleared and existing credentials are untouched.
    pub fn begin_login(&mut self) {
        self.status = SessionStatus::Loading;
        self.error = None;
    }

    /// Successful exchange: both identity fields are installed together and
    /// status returns to `Idle`.
    pub fn complete_login(&mut self, user: User, access_token: impl Into<String>) {
        self.set_credentials(user, access_token);
    }

    /// Failed exchange: status moves to `Failed` with a message. A
    /// previously established session is retained.
    pub fn fail_login(&mut self, message: impl Into<String>) {
        self.status = SessionStatus::Failed;
        self.error = Some(message.into());
    }

    /// Installs credentials directly, without passing through `Loading`.
    /// This is the hydration path.
    pub fn set_credentials(&mut self, user: User, access_token: impl Into<String>) {
        self.user = Some(user);
        self.access_token = Some(access_token.into());
        self.status = SessionStatus::Idle;
        self.error = None;
    }

    /// Logout: back to the empty idle state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Durable copy of an authenticated session, owned by the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    /// The bearer credential.
    pub access_token: String,
    /// The user it belongs to.
    pub user: User,
    /// When the record was written.
    pub saved_at: DateTime<Utc>,
}

impl PersistedSession {
    /// Creates a record stamped with the current time.
    pub fn new(access_token: impl Into<String>, user: User) -> Self {
        Self {
            access_token: access_token.into(),
            user,
            saved_at: Utc::now(),
        }
    }
}
