//! Role-aware route guard.
//!
//! A pure function of the session snapshot: same input, same decision,
//! no hidden state. The UI shell maps the decision to rendering or
//! navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::{ROLE_ADMIN, ROLE_TEACHER, User};
use crate::routes::{DENIED_ROUTE, LOGIN_ROUTE};
use crate::state::session::Session;

/// Outcome of evaluating a guarded route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still being established: render a neutral placeholder,
    /// do not redirect yet.
    Loading,
    /// No user: send to the login view.
    Redirect(&'static str),
    /// Render the guarded content.
    Allow,
}

/// Decide what a guarded route should do for this session snapshot.
///
/// An empty `required_roles` means any authenticated user may pass.
#[must_use]
pub fn route_decision(session: &Session, required_roles: &[&str]) -> RouteDecision {
    if session.is_loading {
        return RouteDecision::Loading;
    }
    let Some(user) = &session.user else {
        return RouteDecision::Redirect(LOGIN_ROUTE);
    };
    if !required_roles.is_empty()
        && !required_roles.iter().any(|role| user.roles.contains(*role))
    {
        return RouteDecision::Redirect(DENIED_ROUTE);
    }
    RouteDecision::Allow
}

/// Landing page for a freshly authenticated user, by role precedence:
/// administrators first, then teachers, everyone else to the student view.
#[must_use]
pub fn home_route(user: &User) -> &'static str {
    if user.roles.contains(ROLE_ADMIN) {
        "/admin"
    } else if user.roles.contains(ROLE_TEACHER) {
        "/docente"
    } else {
        "/estudiante"
    }
}
