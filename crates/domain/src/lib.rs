//! Chairside Domain - Core portal types
//!
//! This crate defines the domain model for the Chairside clinic portal
//! client. All types here are pure Rust with no I/O dependencies.

pub mod api;
pub mod credentials;
pub mod error;
pub mod fetch;
pub mod route;
pub mod session;
pub mod user;

pub use api::{AUTHORIZATION, ApiMethod, ApiRequest, ApiResponse, Header, bearer_value};
pub use credentials::{Credentials, MIN_PASSWORD_LEN};
pub use error::{DomainError, DomainResult};
pub use fetch::FetchState;
pub use route::{DEFAULT_LANDING_PATH, LOGIN_PATH, RouteSpec};
pub use session::{PersistedSession, Session, SessionStatus};
pub use user::{Role, User};
