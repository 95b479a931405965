//! Per-navigation route access decisions.
//!
//! Stateless: the outcome is computed from the current session and the
//! route's requirement on every navigation, never cached.

use crate::session::{Role, Session};

/// What a route demands from the session before it renders.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteRequirement {
    /// Anyone, logged in or not.
    Public,
    /// Any authenticated user, regardless of role.
    Authenticated,
    /// Authenticated with one of the listed roles. An empty list means the
    /// same as [`RouteRequirement::Authenticated`].
    Roles(Vec<Role>),
}

/// The three terminal outcomes of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    RedirectLogin,
    RedirectHome,
}

/// Decide whether a navigation renders its target view or redirects.
pub fn evaluate(session: Option<&Session>, requirement: &RouteRequirement) -> GuardOutcome {
    let required_roles = match requirement {
        RouteRequirement::Public => return GuardOutcome::Render,
        RouteRequirement::Authenticated => None,
        RouteRequirement::Roles(roles) => Some(roles),
    };

    let Some(session) = session else {
        return GuardOutcome::RedirectLogin;
    };

    match required_roles {
        Some(roles) if !roles.is_empty() && !roles.contains(&session.role) => {
            GuardOutcome::RedirectHome
        }
        _ => GuardOutcome::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session::new("tok".into(), 1, "u".into(), role)
    }

    #[test]
    fn public_routes_render_for_everyone() {
        assert_eq!(
            evaluate(None, &RouteRequirement::Public),
            GuardOutcome::Render
        );
        assert_eq!(
            evaluate(Some(&session(Role::User)), &RouteRequirement::Public),
            GuardOutcome::Render
        );
    }

    #[test]
    fn missing_session_redirects_to_login_for_any_auth_route() {
        assert_eq!(
            evaluate(None, &RouteRequirement::Authenticated),
            GuardOutcome::RedirectLogin
        );
        assert_eq!(
            evaluate(None, &RouteRequirement::Roles(vec![Role::Admin])),
            GuardOutcome::RedirectLogin
        );
        assert_eq!(
            evaluate(None, &RouteRequirement::Roles(vec![])),
            GuardOutcome::RedirectLogin
        );
    }

    #[test]
    fn role_mismatch_redirects_home() {
        assert_eq!(
            evaluate(
                Some(&session(Role::User)),
                &RouteRequirement::Roles(vec![Role::Admin])
            ),
            GuardOutcome::RedirectHome
        );
        assert_eq!(
            evaluate(
                Some(&session(Role::User)),
                &RouteRequirement::Roles(vec![Role::Cook, Role::Admin])
            ),
            GuardOutcome::RedirectHome
        );
    }

    #[test]
    fn matching_role_renders() {
        assert_eq!(
            evaluate(
                Some(&session(Role::Admin)),
                &RouteRequirement::Roles(vec![Role::Admin])
            ),
            GuardOutcome::Render
        );
        assert_eq!(
            evaluate(
                Some(&session(Role::Cook)),
                &RouteRequirement::Roles(vec![Role::Cook, Role::Admin])
            ),
            GuardOutcome::Render
        );
    }

    #[test]
    fn empty_role_list_means_any_authenticated_user() {
        assert_eq!(
            evaluate(Some(&session(Role::User)), &RouteRequirement::Roles(vec![])),
            GuardOutcome::Render
        );
        assert_eq!(
            evaluate(Some(&session(Role::User)), &RouteRequirement::Authenticated),
            GuardOutcome::Render
        );
    }
}
