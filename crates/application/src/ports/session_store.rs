//! Durable session persistence port.

use async_trait::async_trait;
use thiserror::Error;

use chairside_domain::PersistedSession;

/// Errors surfaced by the session store.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// The underlying storage could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Port for the durable copy of the session.
///
/// The token and the user record move together: `persist` writes both,
/// `clear` removes both, and a reader can never observe one without the
/// other. `load` treats a corrupt or partial record as absent so a damaged
/// store hydrates as logged out instead of failing startup.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Writes the record, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written.
    async fn persist(&self, record: &PersistedSession) -> Result<(), SessionStoreError>;

    /// Reads the current record. Absent and corrupt records are both `None`.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures other than a missing record.
    async fn load(&self) -> Result<Option<PersistedSession>, SessionStoreError>;

    /// Removes the record. Removing an absent record succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be removed.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
