//! Shared wire-protocol DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. The session types are also
//! the persisted form in tab storage, so they round-trip through serde as-is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// SESSION
// =============================================================================

/// The authenticated identity returned by the backend on login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Role names in backend order (e.g. `"ROLE_USER"`).
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Subject {
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Bearer token plus the subject it represents.
///
/// Constructed only from a successful login; there is no way to build a
/// session with one half missing.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential. Never parsed client-side.
    pub token: String,
    pub subject: Subject,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("subject", &self.subject)
            .finish()
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Credentials submitted from the login form. Never persisted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `200` payload of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token scheme as reported by the backend (`"Bearer"`). Informational.
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self {
            token: resp.token,
            subject: Subject { id: resp.id, username: resp.username, email: resp.email, roles: resp.roles },
        }
    }
}

/// Error body shape used by the backend's exception handler.
///
/// Most failures carry `message`; bean-validation failures carry `errors`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ErrorBody {
    /// Human-readable message, preferring `message` over joined `errors`.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        if let Some(message) = self.message.filter(|m| !m.trim().is_empty()) {
            return Some(message);
        }
        if self.errors.is_empty() {
            return None;
        }
        Some(self.errors.join("; "))
    }
}

// =============================================================================
// RESOURCES
// =============================================================================

/// Product record as exchanged with `/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product_code: String,
    pub product_name: String,
    pub product_value: f64,
    pub stock: i32,
    pub city_id: i64,
    /// Owner as assigned by the backend from the bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// User record as exchanged with `/users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    /// Only sent on create, or on update when the password changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl User {
    /// Drop an empty password so an update keeps the stored one.
    #[must_use]
    pub fn without_blank_password(mut self) -> Self {
        if self.password.as_deref().is_some_and(|p| p.is_empty()) {
            self.password = None;
        }
        self
    }
}
