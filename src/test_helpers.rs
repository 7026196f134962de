//! Shared fixtures for unit tests: a scripted transport, a recording
//! navigator and canned sessions.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::TransportError;
use crate::net::transport::{ApiRequest, ApiResponse, HttpTransport};
use crate::net::types::{Session, Subject};
use crate::routing::Navigator;

// =========================================================================
// MockTransport
// =========================================================================

/// Replays queued responses in order and records every request it receives.
/// Once the queue is empty it answers `200 {}`.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<ApiResponse, TransportError>>) -> Self {
        Self { responses: Mutex::new(responses.into()), requests: Mutex::new(Vec::new()) }
    }

    pub fn replying(status: u16, body: serde_json::Value) -> Self {
        Self::new(vec![Ok(json_response(status, &body))])
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request was sent")
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, "{}")))
    }
}

pub fn json_response(status: u16, body: &serde_json::Value) -> ApiResponse {
    ApiResponse::new(status, body.to_string())
}

// =========================================================================
// RecordingNavigator
// =========================================================================

pub struct RecordingNavigator {
    current: Mutex<String>,
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { current: Mutex::new(path.to_owned()), visits: Mutex::new(Vec::new()) }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::at("/")
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        *self.current.lock().unwrap() = path.to_owned();
        self.visits.lock().unwrap().push(path.to_owned());
    }

    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }
}

// =========================================================================
// Fixtures
// =========================================================================

pub fn alice_session() -> Session {
    session_with_token("abc123")
}

pub fn session_with_token(token: &str) -> Session {
    Session {
        token: token.to_owned(),
        subject: Subject {
            id: 1,
            username: "alice".to_owned(),
            email: "a@x.com".to_owned(),
            roles: vec!["ROLE_USER".to_owned()],
        },
    }
}

pub fn alice_login_payload() -> serde_json::Value {
    serde_json::json!({
        "token": "abc123",
        "type": "Bearer",
        "id": 1,
        "username": "alice",
        "email": "a@x.com",
        "roles": ["ROLE_USER"]
    })
}
