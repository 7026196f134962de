//! Bearer-credential pipeline stage.
//!
//! [`RequestAuthenticator`] wraps another [`HttpTransport`] and is the only
//! place the `Authorization` header is formatted. Call sites never see the
//! session.
//!
//! ERROR HANDLING
//! ==============
//! A `401` (and, when configured, `403`) answer to a request that carried the
//! current token means the backend no longer accepts the session: the store
//! is cleared and the user is sent to the login view with the current
//! location as return destination. The response is passed through with
//! `session_rejected` set so the caller can map it to
//! `ApiError::AuthorizationExpired`.

#[cfg(test)]
#[path = "authenticator_test.rs"]
mod authenticator_test;

use std::sync::Arc;

use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::error::TransportError;
use crate::routing::{Navigator, login_url};
use crate::session::SessionStore;

pub const AUTHORIZATION: &str = "Authorization";

const UNAUTHORIZED: u16 = 401;
const FORBIDDEN: u16 = 403;

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub struct RequestAuthenticator<T> {
    inner: T,
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
    clear_on_forbidden: bool,
}

impl<T: HttpTransport> RequestAuthenticator<T> {
    pub fn new(inner: T, store: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self { inner, store, navigator, clear_on_forbidden: false }
    }

    /// Also treat `403` as session rejection.
    #[must_use]
    pub fn clear_session_on_forbidden(mut self, enabled: bool) -> Self {
        self.clear_on_forbidden = enabled;
        self
    }

    fn is_rejection(&self, status: u16) -> bool {
        status == UNAUTHORIZED || (self.clear_on_forbidden && status == FORBIDDEN)
    }

    /// Sign out after the backend rejected `sent_token`, unless the store has
    /// moved on to a different session since the request left.
    fn expire_session(&self, sent_token: &str, status: u16) {
        if self.store.token().as_deref() != Some(sent_token) {
            log::debug!("ignoring {status} for a session that is no longer current");
            return;
        }
        let return_to = self.navigator.current_path();
        self.store.clear();
        log::info!("backend rejected the session ({status}); signing out");
        self.navigator.navigate(&login_url(&return_to));
    }
}

#[async_trait::async_trait(?Send)]
impl<T: HttpTransport> HttpTransport for RequestAuthenticator<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let token = self.store.token();
        let request = match &token {
            Some(token) => request.with_header(AUTHORIZATION, bearer(token)),
            None => request,
        };
        let credential_exchange = request.credential_exchange;

        let mut response = self.inner.send(request).await?;

        if let Some(sent_token) = token {
            if !credential_exchange && self.is_rejection(response.status) {
                response.session_rejected = true;
                self.expire_session(&sent_token, response.status);
            }
        }
        Ok(response)
    }
}
