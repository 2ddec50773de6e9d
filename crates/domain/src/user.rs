//! User identity and role types.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Capability tag assigned to a portal user.
///
/// The set is closed: adding a role means extending this enum and the
/// allowed-role list of every route that should admit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Practice administrator.
    Admin,
    /// Treating dentist.
    Dentist,
    /// Front-desk receptionist.
    Receptionist,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Dentist, Self::Receptionist];

    /// The wire name of the role, exactly as the profile endpoint returns it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Dentist => "Dentist",
            Self::Receptionist => "Receptionist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Dentist" => Ok(Self::Dentist),
            "Receptionist" => Ok(Self::Receptionist),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

/// An authenticated portal user.
///
/// Created from the profile endpoint's response. Immutable for the lifetime
/// of a session; replaced wholesale on re-login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Assigned role set. Always a set on the wire; records from the
    /// predecessor schema that stored a single `role` string do not decode.
    pub roles: BTreeSet<Role>,
}

impl User {
    /// Creates a user with the given role set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Returns true if the user holds any of the `required` roles.
    ///
    /// The intersection with an empty role set is always empty, so a user
    /// without roles is never admitted by a non-empty requirement.
    #[must_use]
    pub fn has_any_role(&self, required: &BTreeSet<Role>) -> bool {
        !self.roles.is_disjoint(required)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn roles(roles: &[Role]) -> BTreeSet<Role> {
        roles.iter().copied().collect()
    }

    #[test]
    fn role_round_trips_through_wire_names() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn role_parse_rejects_unknown_names() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(
            "Janitor".parse::<Role>(),
            Err(DomainError::UnknownRole("Janitor".to_string()))
        );
    }

    #[test]
    fn user_deserializes_from_profile_response() {
        let user: User = serde_json::from_str(
            r#"{"id":"1","name":"Test","email":"test@example.com","roles":["Admin"]}"#,
        )
        .unwrap();
        assert_eq!(user.name, "Test");
        assert_eq!(user.roles, roles(&[Role::Admin]));
    }

    #[test]
    fn role_intersection() {
        let dentist = User::new("2", "Dr. Kim", "kim@clinic.example", [Role::Dentist]);
        assert!(dentist.has_any_role(&roles(&[Role::Admin, Role::Dentist])));
        assert!(!dentist.has_any_role(&roles(&[Role::Admin, Role::Receptionist])));
    }

    #[test]
    fn empty_role_set_is_never_admitted() {
        let none = User::new("3", "No Roles", "none@clinic.example", []);
        assert!(!none.has_any_role(&roles(&Role::ALL)));
    }

    #[test]
    fn unknown_role_in_profile_is_rejected() {
        let result = serde_json::from_str::<User>(
            r#"{"id":"1","name":"Test","email":"t@e.com","roles":["Janitor"]}"#,
        );
        assert!(result.is_err());
    }
}
