//! Error taxonomy shared by the session, auth and resource layers.
//!
//! ERROR HANDLING
//! ==============
//! Login failures are returned as typed [`AuthError`] values so the login view
//! can show a notice instead of crashing. Resource calls return [`ApiError`].
//! The guard and the request authenticator never surface errors: a missing
//! session is a normal state, not a failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when the backend rejects credentials without a message.
pub const GENERIC_CREDENTIAL_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Fallback shown when the backend cannot be reached or fails unexpectedly.
pub const GENERIC_NETWORK_MESSAGE: &str = "Unable to reach the server. Please try again.";

/// Shown when a 2xx login response does not carry a usable session payload.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "The server sent an unexpected response. Please try again.";

// =============================================================================
// TRANSPORT
// =============================================================================

/// Failures below HTTP status handling: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be assembled (bad header, body encoding).
    #[error("request build failed: {0}")]
    Build(String),

    /// The backend could not be reached.
    #[error("request failed: {0}")]
    Unreachable(String),

    /// A response arrived but its body could not be read.
    #[error("response body unreadable: {0}")]
    Body(String),
}

// =============================================================================
// SESSION
// =============================================================================

/// Failures while persisting the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The session could not be serialized.
    #[error("session encode failed: {0}")]
    Encode(String),

    /// The storage backend refused the write (quota, disabled storage).
    #[error("session storage write failed: {0}")]
    Storage(String),
}

// =============================================================================
// AUTH
// =============================================================================

/// Why a login attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend rejected the username/password pair.
    #[error("{message}")]
    Credential { message: String },

    /// The backend was unreachable or failed unexpectedly.
    #[error("{message}")]
    Network { message: String },

    /// Login succeeded but the session could not be stored in this tab.
    #[error("session could not be stored: {0}")]
    Storage(#[from] SessionError),
}

impl AuthError {
    /// Credential rejection with the backend's message, or the generic fallback.
    #[must_use]
    pub fn credential(message: Option<String>) -> Self {
        Self::Credential { message: message.unwrap_or_else(|| GENERIC_CREDENTIAL_MESSAGE.to_owned()) }
    }

    /// Network/server failure with the backend's message, or the generic fallback.
    #[must_use]
    pub fn network(message: Option<String>) -> Self {
        Self::Network { message: message.unwrap_or_else(|| GENERIC_NETWORK_MESSAGE.to_owned()) }
    }

    /// Text for the transient notification on the login view.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether resubmitting the same credentials could succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

// =============================================================================
// RESOURCE API
// =============================================================================

/// Errors from authenticated resource calls (products, users).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend no longer accepts the session token. The session has
    /// already been cleared by the request authenticator.
    #[error("session expired; sign in again")]
    AuthorizationExpired,

    /// The backend answered with a non-success status.
    #[error("request rejected with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The request payload could not be encoded.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response payload did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a transient notification on a resource page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Transport(_) => GENERIC_NETWORK_MESSAGE.to_owned(),
            other => other.to_string(),
        }
    }

    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Unreachable(_)) | Self::Status { status: 500..=599, .. })
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Configuration values that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The API base URL is empty or not http(s).
    #[error("invalid API base URL: {0:?}")]
    InvalidBaseUrl(String),
}
