//! Route protection.
//!
//! A [`RouteGuard`] decides, during render, whether a protected view is
//! shown. It assumes the caller already checked that the session is
//! authenticated; unauthenticated sessions are sent to the login entry
//! point by the surrounding route wrapper, not here.

use serde::Serialize;

use crate::evaluator::Evaluator;
use crate::requirement::AccessRequirement;

/// Landing route for signed-in users who may not open the requested page.
pub const DEFAULT_LANDING_ROUTE: &str = "/dashboard";

/// Navigation instruction produced instead of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub to: String,
}

impl Redirect {
    pub fn to(path: impl Into<String>) -> Self {
        Self { to: path.into() }
    }
}

impl Default for Redirect {
    fn default() -> Self {
        Self::to(DEFAULT_LANDING_ROUTE)
    }
}

/// What a guarded route renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    /// The requirement passed; the protected view.
    View(V),
    /// The requirement failed and an explicit fallback was configured.
    Fallback(V),
    /// The requirement failed and no fallback was configured.
    Redirect(Redirect),
}

impl<V> Guarded<V> {
    #[must_use]
    pub const fn is_view(&self) -> bool {
        matches!(self, Self::View(_))
    }
}

/// Gate around a protected view.
#[derive(Debug, Clone)]
pub struct RouteGuard<V> {
    requirement: AccessRequirement,
    fallback: Option<V>,
    redirect: Redirect,
}

impl<V> RouteGuard<V> {
    /// Guard with the default redirect to [`DEFAULT_LANDING_ROUTE`].
    pub fn new(requirement: AccessRequirement) -> Self {
        Self {
            requirement,
            fallback: None,
            redirect: Redirect::default(),
        }
    }

    /// Render `fallback` instead of redirecting when access is denied.
    #[must_use]
    pub fn with_fallback(mut self, fallback: V) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Redirect to `landing` instead of [`DEFAULT_LANDING_ROUTE`].
    #[must_use]
    pub fn with_landing(mut self, landing: impl Into<String>) -> Self {
        self.redirect = Redirect::to(landing);
        self
    }

    pub const fn requirement(&self) -> &AccessRequirement {
        &self.requirement
    }

    /// Render the protected view if the requirement passes.
    ///
    /// `render` only runs when access is granted.
    pub fn resolve<F>(self, evaluator: &Evaluator<'_>, render: F) -> Guarded<V>
    where
        F: FnOnce() -> V,
    {
        if evaluator.evaluate(&self.requirement) {
            return Guarded::View(render());
        }

        match self.fallback {
            Some(fallback) => Guarded::Fallback(fallback),
            None => {
                tracing::debug!(to = %self.redirect.to, "route denied, redirecting");
                Guarded::Redirect(self.redirect)
            }
        }
    }
}
