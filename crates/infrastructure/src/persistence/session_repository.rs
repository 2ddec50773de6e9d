//! File-backed session store.
//!
//! The token and the user profile live in ONE JSON document under the data
//! directory, so a reader can never observe the token without the user or
//! vice versa. A record that cannot be decoded hydrates as logged out
//! instead of failing startup.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use chairside_application::ports::{
    FileSystem, FileSystemError, SessionStore, SessionStoreError,
};
use chairside_domain::PersistedSession;

/// Current on-disk schema version.
const SCHEMA_VERSION: u32 = 1;

/// Name of the session record file inside the data directory.
const SESSION_FILE: &str = "session.json";

/// On-disk envelope around the persisted record.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionDocument {
    schema_version: u32,
    #[serde(flatten)]
    record: PersistedSession,
}

/// Session store persisting to `<data_dir>/session.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore<F> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> FileSessionStore<F> {
    /// Creates a store rooted at `data_dir`.
    pub fn new(fs: F, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: data_dir.into().join(SESSION_FILE),
        }
    }

    /// Path of the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn to_store_error(err: FileSystemError) -> SessionStoreError {
    match err {
        FileSystemError::Io(io) => SessionStoreError::Io(io),
        other => SessionStoreError::Io(std::io::Error::other(other.to_string())),
    }
}

#[async_trait]
impl<F: FileSystem> SessionStore for FileSessionStore<F> {
    async fn persist(&self, record: &PersistedSession) -> Result<(), SessionStoreError> {
        let document = SessionDocument {
            schema_version: SCHEMA_VERSION,
            record: record.clone(),
        };
        let content = serde_json::to_vec_pretty(&document)
            .map_err(|e| SessionStoreError::Serialization(e.to_string()))?;
        self.fs
            .write(&self.path, &content)
            .await
            .map_err(to_store_error)
    }

    async fn load(&self) -> Result<Option<PersistedSession>, SessionStoreError> {
        let content = match self.fs.read_to_string(&self.path).await {
            Ok(content) => content,
            Err(FileSystemError::NotFound(_)) => return Ok(None),
            Err(err) => return Err(to_store_error(err)),
        };

        match serde_json::from_str::<SessionDocument>(&content) {
            Ok(document) if document.schema_version == SCHEMA_VERSION => {
                Ok(Some(document.record))
            }
            Ok(document) => {
                warn!(
                    version = document.schema_version,
                    "unsupported session record version, treating as absent"
                );
                Ok(None)
            }
            Err(err) => {
                warn!(error = %err, "corrupt session record, treating as absent");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match self.fs.remove_file(&self.path).await {
            Ok(()) | Err(FileSystemError::NotFound(_)) => Ok(()),
            Err(err) => Err(to_store_error(err)),
        }
    }
}
