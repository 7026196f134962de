use super::*;
use crate::error::{GENERIC_CREDENTIAL_MESSAGE, GENERIC_NETWORK_MESSAGE, TransportError};
use crate::net::transport::Method;
use crate::test_helpers::{MockTransport, alice_login_payload, alice_session};
use std::sync::Arc;

fn alice() -> LoginRequest {
    LoginRequest::new("alice", "secret")
}

// =========================================================================
// request shape
// =========================================================================

#[tokio::test]
async fn posts_credentials_as_json_credential_exchange() {
    let transport = Arc::new(MockTransport::replying(200, alice_login_payload()));
    let client = AuthenticationClient::new(transport.clone());

    client.login(&alice()).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.path, LOGIN_ENDPOINT);
    assert_eq!(sent.body, Some(serde_json::json!({ "username": "alice", "password": "secret" })));
    assert!(sent.credential_exchange);
}

#[tokio::test]
async fn does_not_retry_rejections() {
    let transport = Arc::new(MockTransport::replying(401, serde_json::json!({ "message": "Bad credentials" })));
    let client = AuthenticationClient::new(transport.clone());

    let _ = client.login(&alice()).await;

    assert_eq!(transport.requests().len(), 1);
}

// =========================================================================
// success
// =========================================================================

#[tokio::test]
async fn success_maps_payload_into_session() {
    let client = AuthenticationClient::new(MockTransport::replying(200, alice_login_payload()));

    let session = client.login(&alice()).await.unwrap();

    assert_eq!(session, alice_session());
    assert_eq!(session.subject.username, "alice");
}

#[tokio::test]
async fn success_with_unusable_payload_is_network_error() {
    let client = AuthenticationClient::new(MockTransport::replying(200, serde_json::json!({ "ok": true })));

    let err = client.login(&alice()).await.unwrap_err();

    assert_eq!(err, AuthError::Network { message: UNEXPECTED_RESPONSE_MESSAGE.to_owned() });
}

// =========================================================================
// rejection classification
// =========================================================================

#[tokio::test]
async fn bad_credentials_surface_backend_message() {
    let client =
        AuthenticationClient::new(MockTransport::replying(401, serde_json::json!({ "message": "Bad credentials" })));

    let err = client.login(&LoginRequest::new("alice", "wrong")).await.unwrap_err();

    assert_eq!(err, AuthError::Credential { message: "Bad credentials".to_owned() });
}

#[tokio::test]
async fn rejection_without_body_uses_generic_message() {
    let client = AuthenticationClient::new(MockTransport::new(vec![Ok(ApiResponse::new(401, ""))]));

    let err = client.login(&alice()).await.unwrap_err();

    assert_eq!(err, AuthError::Credential { message: GENERIC_CREDENTIAL_MESSAGE.to_owned() });
}

#[tokio::test]
async fn validation_failure_is_credential_error_with_details() {
    let client = AuthenticationClient::new(MockTransport::replying(
        400,
        serde_json::json!({ "errors": ["Password cannot be blank"] }),
    ));

    let err = client.login(&alice()).await.unwrap_err();

    assert_eq!(err, AuthError::Credential { message: "Password cannot be blank".to_owned() });
}

#[tokio::test]
async fn server_failure_is_network_error() {
    let client = AuthenticationClient::new(MockTransport::replying(
        500,
        serde_json::json!({ "message": "An unexpected error occurred" }),
    ));

    let err = client.login(&alice()).await.unwrap_err();

    assert_eq!(err, AuthError::Network { message: "An unexpected error occurred".to_owned() });
    assert!(err.retryable());
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let client =
        AuthenticationClient::new(MockTransport::new(vec![Err(TransportError::Unreachable("refused".to_owned()))]));

    let err = client.login(&alice()).await.unwrap_err();

    assert_eq!(err, AuthError::Network { message: GENERIC_NETWORK_MESSAGE.to_owned() });
}
