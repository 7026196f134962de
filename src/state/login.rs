//! Login flow: form validation, the credential exchange, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the caller side of [`AuthenticationClient::login`]. It saves the
//! session before handing the return destination back to the view, so any
//! navigation that follows already sees the new session.
//!
//! A submission is only allowed to save its session while it is the latest
//! attempt. Leaving the login view or submitting again makes older in-flight
//! attempts stale, and their results are dropped.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::AuthError;
use crate::net::auth::AuthenticationClient;
use crate::net::transport::HttpTransport;
use crate::net::types::LoginRequest;
use crate::routing::{LOGIN_PATH, Navigator, sanitize_return_url};
use crate::session::SessionStore;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both username and password.";

/// Trim the username and require both fields.
///
/// # Errors
///
/// Returns a user-facing message when either field is empty.
pub fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok(LoginRequest::new(username, password))
}

/// What the view should do once a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session saved; continue to this in-app path.
    SignedIn { redirect_to: String },
    /// A newer submission or a page exit superseded this one. Nothing changed.
    Superseded,
}

/// Monotonic attempt counter. Only the latest attempt is current.
#[derive(Debug, Default)]
pub struct LoginAttempts {
    latest: AtomicU64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptId(u64);

impl LoginAttempts {
    pub fn begin(&self) -> AttemptId {
        AttemptId(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate every attempt started so far.
    pub fn abandon(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, attempt: AttemptId) -> bool {
        self.latest.load(Ordering::SeqCst) == attempt.0
    }
}

pub struct LoginFlow<T> {
    client: AuthenticationClient<T>,
    store: SessionStore,
    attempts: LoginAttempts,
}

impl<T: HttpTransport> LoginFlow<T> {
    pub fn new(client: AuthenticationClient<T>, store: SessionStore) -> Self {
        Self { client, store, attempts: LoginAttempts::default() }
    }

    /// Run the credential exchange and, if this is still the latest attempt,
    /// save the session.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] from the exchange, or
    /// [`AuthError::Storage`] if the session could not be saved. Errors from
    /// superseded attempts are swallowed.
    pub async fn submit(&self, request: LoginRequest, return_url: Option<&str>) -> Result<LoginOutcome, AuthError> {
        let attempt = self.attempts.begin();
        let result = self.client.login(&request).await;

        if !self.attempts.is_current(attempt) {
            log::debug!("discarding result of a superseded login attempt");
            return Ok(LoginOutcome::Superseded);
        }

        let session = result?;
        self.store.save(&session)?;
        Ok(LoginOutcome::SignedIn { redirect_to: sanitize_return_url(return_url) })
    }

    /// The login view went away; drop any in-flight result.
    pub fn abandon(&self) {
        self.attempts.abandon();
    }
}

/// Clear the session and show the login view.
pub fn sign_out(store: &SessionStore, navigator: &dyn Navigator) {
    store.clear();
    log::info!("signed out");
    navigator.navigate(LOGIN_PATH);
}
