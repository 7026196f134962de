//! Route access guard for protected views.
//!
//! The guard is a presence check on the session token. It does not inspect
//! the token: an expired token still passes here until the backend rejects a
//! request and the request authenticator signs the user out.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;

use crate::routing::{Navigator, login_url};
use crate::session::SessionStore;

/// Decides whether a protected view may be entered. Stateless between calls.
#[derive(Clone)]
pub struct RouteAccessGuard {
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl RouteAccessGuard {
    pub fn new(store: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// `true` when a session token is present. Otherwise sends the user to the
    /// login view with `target_path` as the return destination and returns
    /// `false`.
    pub fn can_enter(&self, target_path: &str) -> bool {
        if self.store.token().is_some() {
            return true;
        }
        log::debug!("no session; redirecting {target_path} to login");
        self.navigator.navigate(&login_url(target_path));
        false
    }
}
