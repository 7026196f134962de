use super::*;

fn login_payload() -> serde_json::Value {
    serde_json::json!({
        "token": "abc123",
        "type": "Bearer",
        "id": 1,
        "username": "alice",
        "email": "a@x.com",
        "roles": ["ROLE_USER"]
    })
}

#[test]
fn login_response_maps_into_session() {
    let resp: LoginResponse = serde_json::from_value(login_payload()).unwrap();
    assert_eq!(resp.token_type.as_deref(), Some("Bearer"));

    let session = Session::from(resp);
    assert_eq!(session.token, "abc123");
    assert_eq!(
        session.subject,
        Subject { id: 1, username: "alice".into(), email: "a@x.com".into(), roles: vec!["ROLE_USER".into()] }
    );
}

#[test]
fn login_response_tolerates_missing_type_and_roles() {
    let resp: LoginResponse =
        serde_json::from_value(serde_json::json!({ "token": "t", "id": 2, "username": "bob", "email": "b@x.com" }))
            .unwrap();
    assert!(resp.token_type.is_none());
    assert!(resp.roles.is_empty());
}

#[test]
fn login_response_without_token_is_rejected() {
    let result: Result<LoginResponse, _> =
        serde_json::from_value(serde_json::json!({ "id": 2, "username": "bob", "email": "b@x.com" }));
    assert!(result.is_err());
}

#[test]
fn debug_output_redacts_secrets() {
    let request = LoginRequest::new("alice", "secret");
    let rendered = format!("{request:?}");
    assert!(rendered.contains("alice"));
    assert!(!rendered.contains("secret"));

    let session = Session::from(serde_json::from_value::<LoginResponse>(login_payload()).unwrap());
    assert!(!format!("{session:?}").contains("abc123"));
}

#[test]
fn subject_has_role() {
    let subject = Subject { id: 1, username: "a".into(), email: "e".into(), roles: vec!["ROLE_ADMIN".into()] };
    assert!(subject.has_role("ROLE_ADMIN"));
    assert!(!subject.has_role("ROLE_USER"));
}

// =============================================================================
// ErrorBody
// =============================================================================

#[test]
fn error_body_prefers_message() {
    let body: ErrorBody =
        serde_json::from_value(serde_json::json!({ "message": "Bad credentials", "errors": ["x"] })).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Bad credentials"));
}

#[test]
fn error_body_joins_validation_errors() {
    let body: ErrorBody = serde_json::from_value(serde_json::json!({
        "timestamp": "2024-01-01T00:00:00",
        "errors": ["Password cannot be blank", "Invalid CPF format"]
    }))
    .unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Password cannot be blank; Invalid CPF format"));
}

#[test]
fn error_body_blank_message_is_absent() {
    let body = ErrorBody { message: Some("  ".into()), errors: vec![] };
    assert_eq!(body.into_message(), None);
}

// =============================================================================
// Resources
// =============================================================================

#[test]
fn product_uses_camel_case_and_skips_missing_id() {
    let product = Product {
        id: None,
        product_code: "P-001".into(),
        product_name: "Widget".into(),
        product_value: 9.5,
        stock: 3,
        city_id: 7,
        user_id: None,
    };
    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(value["productCode"], "P-001");
    assert_eq!(value["cityId"], 7);
    assert!(value.get("id").is_none());
    assert!(value.get("userId").is_none());
}

#[test]
fn user_blank_password_is_dropped() {
    let user = User {
        id: Some(4),
        username: "carol".into(),
        email: "c@x.com".into(),
        password: Some(String::new()),
        roles: vec!["ROLE_USER".into()],
    }
    .without_blank_password();
    assert!(user.password.is_none());
    assert!(serde_json::to_value(&user).unwrap().get("password").is_none());
}

#[test]
fn user_non_blank_password_is_kept() {
    let user = User {
        id: None,
        username: "dave".into(),
        email: "d@x.com".into(),
        password: Some("hunter22".into()),
        roles: vec![],
    }
    .without_blank_password();
    assert_eq!(user.password.as_deref(), Some("hunter22"));
}
