//! Chairside Application - session lifecycle and authorization policy
//!
//! This crate holds the portal's authentication core: the ports that bound
//! it (durable session store, credential exchange, API transport), the
//! session manager that owns the in-memory state machine, the bearer
//! request authorizer, the navigation gates, and the generic data-fetch
//! wrapper feature views build on.

pub mod authorizer;
pub mod error;
pub mod fetch;
pub mod ports;
pub mod routing;
pub mod session;

pub use authorizer::RequestAuthorizer;
pub use error::{ApplicationError, ApplicationResult};
pub use fetch::DataFetch;
pub use routing::RouteDecision;
pub use session::SessionManager;
