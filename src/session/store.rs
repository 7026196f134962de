//! The session store.
//!
//! DESIGN
//! ======
//! Token and subject are persisted together as one JSON document under
//! [`SESSION_KEY`], so a save or clear is a single storage operation and a
//! half-written session cannot be observed. Reads decode the document on
//! every call; there is no cache to go stale.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use super::storage::{MemoryStorage, SessionStorage};
use crate::error::SessionError;
use crate::net::types::{Session, Subject};

/// Storage key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "auth-session";

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Shared handle to the current tab's session. Cloning is cheap; all clones
/// see the same storage and listeners.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage, listeners: Arc::new(Mutex::new(Vec::new())) }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Store backed by `window.sessionStorage`.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(super::storage::BrowserSessionStorage))
    }

    /// Replace whatever session is stored with `session`.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the session cannot be encoded or the
    /// storage backend refuses the write; the previous state is left as is.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let raw = serde_json::to_string(session).map_err(|e| SessionError::Encode(e.to_string()))?;
        self.storage.set(SESSION_KEY, &raw)?;
        log::debug!("session saved for user {}", session.subject.username);
        self.notify();
        Ok(())
    }

    /// The full session, or `None` when signed out.
    ///
    /// A stored document that does not decode is treated as absent.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        let raw = self.storage.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("ignoring unreadable stored session: {e}");
                None
            }
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }

    #[must_use]
    pub fn current_user(&self) -> Option<Subject> {
        self.session().map(|s| s.subject)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Remove the session. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        let had_session = self.storage.get(SESSION_KEY).is_some();
        self.storage.remove(SESSION_KEY);
        if had_session {
            log::debug!("session cleared");
            self.notify();
        }
    }

    /// Register a callback run after every change to the stored session.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        listeners.push(Arc::new(listener));
    }

    fn notify(&self) {
        // Snapshot first so a listener may read or subscribe without deadlocking.
        let listeners: Vec<Listener> = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in listeners {
            listener();
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
