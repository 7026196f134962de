//! Credential exchange against `POST /auth/login`.
//!
//! The client only converts credentials into a [`Session`]; saving it is the
//! caller's job (see `state::login::LoginFlow`). Rejections are not retried:
//! a wrong password is a credential outcome, and the user resubmits.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use super::types::{LoginRequest, LoginResponse, Session};
use crate::error::{AuthError, UNEXPECTED_RESPONSE_MESSAGE};

pub const LOGIN_ENDPOINT: &str = "/auth/login";

pub struct AuthenticationClient<T> {
    transport: T,
}

impl<T: HttpTransport> AuthenticationClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Exchange `request` for a session.
    ///
    /// Callers must reject empty usernames/passwords before calling.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Credential`] when the backend rejects the
    /// credentials (4xx) and [`AuthError::Network`] when it cannot be reached,
    /// fails (5xx), or answers with an unusable payload.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, AuthError> {
        let api_request = ApiRequest::post(LOGIN_ENDPOINT)
            .json(request)
            .map_err(|e| AuthError::network(Some(e.to_string())))?
            .as_credential_exchange();

        log::debug!("login attempt for {}", request.username);
        let response = self.transport.send(api_request).await.map_err(|e| {
            log::warn!("login request failed: {e}");
            AuthError::network(None)
        })?;

        let result = session_from_response(&response);
        match &result {
            Ok(session) => log::info!("signed in as {}", session.subject.username),
            Err(e) => log::info!("login rejected ({}): {e}", response.status),
        }
        result
    }
}

fn session_from_response(response: &ApiResponse) -> Result<Session, AuthError> {
    if response.is_success() {
        return response
            .json::<LoginResponse>()
            .map(Session::from)
            .map_err(|e| {
                log::warn!("unexpected login payload: {e}");
                AuthError::Network { message: UNEXPECTED_RESPONSE_MESSAGE.to_owned() }
            });
    }

    let message = response.error_message();
    if (400..500).contains(&response.status) {
        Err(AuthError::credential(message))
    } else {
        Err(AuthError::network(message))
    }
}
