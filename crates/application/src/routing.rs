//! Navigation gates for guarded destinations.
//!
//! Two independent, composable gates: presence (is anyone logged in) and
//! role (may this user enter this destination). An authenticated user who
//! fails the role gate is sent to the landing page, never back to login.

use chairside_domain::{DEFAULT_LANDING_PATH, LOGIN_PATH, RouteSpec, Session};

/// Outcome of evaluating a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Navigation may proceed.
    Grant,
    /// No session: go to the login destination.
    RedirectToLogin,
    /// Authenticated but not authorized for this destination: go to the
    /// default landing page.
    RedirectToLanding,
}

impl RouteDecision {
    /// Redirect target, when the decision is a redirect.
    #[must_use]
    pub const fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Grant => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToLanding => Some(DEFAULT_LANDING_PATH),
        }
    }

    /// Returns true when navigation may proceed.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Grant)
    }
}

/// Presence gate: guarded destinations require a session token.
#[must_use]
pub fn presence_gate(session: &Session) -> RouteDecision {
    if session.is_authenticated() {
        RouteDecision::Grant
    } else {
        RouteDecision::RedirectToLogin
    }
}

/// Role gate: requires a non-empty intersection between the user's roles
/// and the route's allowed set. An empty allowed set admits any
/// authenticated user. Presence must already be established.
#[must_use]
pub fn role_gate(session: &Session, route: &RouteSpec) -> RouteDecision {
    if route.allowed_roles.is_empty() {
        return RouteDecision::Grant;
    }
    let admitted = session
        .user
        .as_ref()
        .is_some_and(|user| user.has_any_role(&route.allowed_roles));
    if admitted {
        RouteDecision::Grant
    } else {
        RouteDecision::RedirectToLanding
    }
}

/// Evaluates both gates in order: presence first, then roles.
#[must_use]
pub fn evaluate(session: &Session, route: &RouteSpec) -> RouteDecision {
    match presence_gate(session) {
        RouteDecision::Grant => role_gate(session, route),
        deny => deny,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use chairside_domain::{Role, User};

    use super::*;

    fn authenticated(roles: &[Role]) -> Session {
        let mut session = Session::new();
        session.set_credentials(
            User::new("1", "Test", "test@example.com", roles.iter().copied()),
            "token123",
        );
        session
    }

    fn guarded(roles: &[Role]) -> RouteSpec {
        RouteSpec::new("/guarded", roles.iter().copied()).unwrap()
    }

    #[test]
    fn unauthenticated_is_sent_to_login_for_every_guarded_route() {
        let session = Session::new();
        for roles in [
            &[Role::Admin][..],
            &[Role::Dentist][..],
            &Role::ALL[..],
            &[][..],
        ] {
            let decision = evaluate(&session, &guarded(roles));
            assert_eq!(decision, RouteDecision::RedirectToLogin);
            assert_eq!(decision.redirect_path(), Some(LOGIN_PATH));
        }
    }

    #[test]
    fn matching_role_is_granted() {
        let session = authenticated(&[Role::Receptionist]);
        let decision = evaluate(&session, &guarded(&[Role::Admin, Role::Receptionist]));
        assert!(decision.is_granted());
    }

    #[test]
    fn non_matching_role_lands_on_the_dashboard_not_login() {
        let session = authenticated(&[Role::Dentist]);
        let decision = evaluate(&session, &guarded(&[Role::Admin]));
        assert_eq!(decision, RouteDecision::RedirectToLanding);
        assert_eq!(decision.redirect_path(), Some(DEFAULT_LANDING_PATH));
    }

    #[test]
    fn empty_user_role_set_is_never_admitted() {
        let session = authenticated(&[]);
        let decision = evaluate(&session, &guarded(&Role::ALL));
        assert_eq!(decision, RouteDecision::RedirectToLanding);
    }

    #[test]
    fn empty_allowed_set_admits_any_authenticated_user() {
        let session = authenticated(&[]);
        assert!(evaluate(&session, &guarded(&[])).is_granted());
    }
}
