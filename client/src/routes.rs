//! Page routes and the authenticated route wrapper.

use serde::{Deserialize, Serialize};
use tb_access::{AccessRequirement, Guarded, Redirect, RouteGuard, Session};

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    /// Reachable without signing in (login, password reset).
    #[serde(default)]
    pub public: bool,
    #[serde(default, skip_serializing_if = "AccessRequirement::is_none")]
    pub requirement: AccessRequirement,
    /// Message shown instead of redirecting when access is denied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// What the client shows for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Page(String),
    Notice(String),
}

/// Redirect targets used by [`resolve_route`].
#[derive(Debug, Clone, Copy)]
pub struct Entrypoints<'a> {
    pub login: &'a str,
    pub landing: &'a str,
}

/// Resolve a route for the current session.
///
/// Signed-out sessions are sent to the login entry point before any
/// permission check. Signed-in sessions go through the route guard, which
/// falls back to the configured notice or redirects to the landing route.
pub fn resolve_route(
    session: &Session,
    route: &RouteEntry,
    entrypoints: Entrypoints<'_>,
) -> Guarded<Screen> {
    if !route.public && !session.is_authenticated() {
        tracing::debug!(path = %route.path, "not signed in, redirecting to login");
        return Guarded::Redirect(Redirect::to(entrypoints.login));
    }

    let mut guard = RouteGuard::new(route.requirement.clone()).with_landing(entrypoints.landing);
    if let Some(notice) = &route.fallback {
        guard = guard.with_fallback(Screen::Notice(notice.clone()));
    }

    guard.resolve(&session.evaluator(), || Screen::Page(route.path.clone()))
}
