//! Guarded navigation destinations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::user::Role;

/// Destination unauthenticated visitors are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// Default landing destination for authenticated users who are not
/// authorized for the route they asked for.
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

/// A guarded destination and the roles permitted to enter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Absolute navigation path, e.g. `/appointments`.
    pub path: String,
    /// Roles admitted to this destination. Empty means any authenticated
    /// user may enter.
    #[serde(default)]
    pub allowed_roles: BTreeSet<Role>,
}

impl RouteSpec {
    /// Creates a guarded route admitting the given roles.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is empty or not absolute.
    pub fn new(
        path: impl Into<String>,
        allowed_roles: impl IntoIterator<Item = Role>,
    ) -> DomainResult<Self> {
        let path = path.into();
        if path.is_empty() || !path.starts_with('/') {
            return Err(DomainError::InvalidRoutePath(path));
        }
        Ok(Self {
            path,
            allowed_roles: allowed_roles.into_iter().collect(),
        })
    }
}
