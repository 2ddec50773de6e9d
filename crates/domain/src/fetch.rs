//! Loading/data/error state for feature-view API calls.

/// State of a generic data fetch, as feature views observe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No fetch has been dispatched yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last fetch succeeded.
    Success {
        /// The decoded response payload.
        data: T,
    },
    /// The last fetch failed.
    Error {
        /// Human-readable failure message.
        message: String,
    },
}

impl<T> FetchState<T> {
    /// Successful state carrying `data`.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self::Success { data }
    }

    /// Failed state carrying `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Returns true before the first dispatch.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The payload of a successful fetch, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    /// The message of a failed fetch, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}
