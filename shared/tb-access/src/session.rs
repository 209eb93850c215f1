//! Session state shared by every access consumer.
//!
//! The store publishes immutable [`Session`] snapshots through a
//! `tokio::sync::watch` channel. Each publish swaps the whole snapshot, so a
//! reader always sees a principal together with the effective permissions
//! computed from it.

use std::sync::Arc;

use smol_str::SmolStr;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::evaluator::Evaluator;
use crate::models::{Principal, ProfileUpdate};
use crate::resolver::{aggregate, EffectivePermissions};

/// Immutable view of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    principal: Option<Principal>,
    permissions: EffectivePermissions,
    role_names: Vec<SmolStr>,
}

impl Session {
    /// A signed-out session. Every gated check fails.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build a session, deriving the effective permissions from `principal`.
    ///
    /// An authenticated session without a loaded principal is valid (the
    /// profile fetch may still be pending) and has no permissions.
    #[must_use]
    pub fn new(authenticated: bool, principal: Option<Principal>) -> Self {
        let permissions = aggregate(principal.as_ref());
        let role_names: Vec<SmolStr> = principal
            .as_ref()
            .map(|p| p.role_names().cloned().collect())
            .unwrap_or_default();

        debug!(
            authenticated,
            permissions = permissions.len(),
            roles = role_names.len(),
            "effective permissions computed"
        );

        Self {
            authenticated,
            principal,
            permissions,
            role_names,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub const fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[must_use]
    pub const fn permissions(&self) -> &EffectivePermissions {
        &self.permissions
    }

    #[must_use]
    pub fn role_names(&self) -> &[SmolStr] {
        &self.role_names
    }

    /// Evaluator over this snapshot.
    #[must_use]
    pub fn evaluator(&self) -> Evaluator<'_> {
        Evaluator::new(&self.permissions, &self.role_names)
    }
}

/// Owner of the current session snapshot.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Arc<Session>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store holding an anonymous session.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(Session::anonymous()));
        Self { tx: Arc::new(tx) }
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Session> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receive every snapshot published after this call.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<Session>> {
        self.tx.subscribe()
    }

    /// Publish a signed-in session for `principal`.
    pub fn login(&self, principal: Principal) {
        info!(user_id = %principal.id, username = %principal.username, "session started");
        self.publish(Session::new(true, Some(principal)));
    }

    /// Replace the principal after a profile fetch, keeping the session
    /// signed in.
    pub fn refresh_profile(&self, principal: Principal) {
        debug!(user_id = %principal.id, "profile refreshed");
        self.publish(Session::new(true, Some(principal)));
    }

    /// Update display fields of the current principal.
    ///
    /// Returns `false` when no principal is loaded.
    pub fn update_profile(&self, update: ProfileUpdate) -> bool {
        self.tx.send_if_modified(|current| {
            let Some(principal) = current.principal() else {
                return false;
            };
            let mut principal = principal.clone();
            principal.apply(update);
            let authenticated = current.is_authenticated();
            *current = Arc::new(Session::new(authenticated, Some(principal)));
            true
        })
    }

    /// Publish an anonymous session.
    pub fn logout(&self) {
        info!("session ended");
        self.publish(Session::anonymous());
    }

    fn publish(&self, session: Session) {
        self.tx.send_replace(Arc::new(session));
    }
}
