//! End-to-end session flows against a local stand-in for the REST backend.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use gerenciador_client::net::api::ProductService;
use gerenciador_client::net::transport::{ReqwestTransport, SharedTransport};
use gerenciador_client::state::login::{LoginFlow, LoginOutcome};
use gerenciador_client::{
    ApiError, AuthError, AuthenticationClient, ClientConfig, LoginRequest, Navigator, RequestAuthenticator,
    RouteAccessGuard, SessionStore,
};

// =============================================================================
// BACKEND
// =============================================================================

const TOKEN: &str = "abc123";

#[derive(Clone, Default)]
struct Backend {
    revoked: Arc<AtomicBool>,
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "alice" && body["password"] == "secret" {
        Json(json!({
            "token": TOKEN,
            "type": "Bearer",
            "id": 1,
            "username": "alice",
            "email": "a@x.com",
            "roles": ["ROLE_USER"]
        }))
        .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Bad credentials" }))).into_response()
    }
}

async fn products(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"));
    if !authorized || backend.revoked.load(Ordering::SeqCst) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!([{
        "id": 7,
        "productCode": "P-7",
        "productName": "Widget",
        "productValue": 9.5,
        "stock": 3,
        "cityId": 1,
        "userId": 1
    }]))
    .into_response()
}

async fn spawn_backend() -> (String, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/products", get(products))
        .with_state(backend.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), backend)
}

// =============================================================================
// CLIENT
// =============================================================================

struct Recorder {
    current: Mutex<String>,
    visits: Mutex<Vec<String>>,
}

impl Recorder {
    fn at(path: &str) -> Arc<Self> {
        Arc::new(Self { current: Mutex::new(path.to_owned()), visits: Mutex::new(Vec::new()) })
    }

    fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for Recorder {
    fn navigate(&self, path: &str) {
        *self.current.lock().unwrap() = path.to_owned();
        self.visits.lock().unwrap().push(path.to_owned());
    }

    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }
}

struct Client {
    store: SessionStore,
    navigator: Arc<Recorder>,
    guard: RouteAccessGuard,
    login: LoginFlow<Arc<RequestAuthenticator<SharedTransport>>>,
    products: ProductService<Arc<RequestAuthenticator<SharedTransport>>>,
}

fn client_for(base_url: &str, path: &str) -> Client {
    let config = ClientConfig { api_base_url: base_url.to_owned(), ..ClientConfig::default() };
    let transport: SharedTransport = Arc::new(ReqwestTransport::new(&config).unwrap());
    let store = SessionStore::in_memory();
    let navigator = Recorder::at(path);
    let pipeline = Arc::new(RequestAuthenticator::new(transport, store.clone(), navigator.clone()));
    Client {
        guard: RouteAccessGuard::new(store.clone(), navigator.clone()),
        login: LoginFlow::new(AuthenticationClient::new(pipeline.clone()), store.clone()),
        products: ProductService::new(pipeline),
        store,
        navigator,
    }
}

// =============================================================================
// FLOWS
// =============================================================================

#[tokio::test]
async fn sign_in_then_enter_protected_view() {
    let (base_url, _backend) = spawn_backend().await;
    let client = client_for(&base_url, "/login");

    let outcome = client.login.submit(LoginRequest::new("alice", "secret"), Some("/products")).await.unwrap();

    assert_eq!(outcome, LoginOutcome::SignedIn { redirect_to: "/products".to_owned() });
    assert_eq!(client.store.token().as_deref(), Some(TOKEN));
    assert_eq!(client.store.current_user().map(|u| u.username).as_deref(), Some("alice"));
    assert!(client.guard.can_enter("/products"));
    assert!(client.navigator.visits().is_empty());
}

#[tokio::test]
async fn bad_credentials_leave_store_empty() {
    let (base_url, _backend) = spawn_backend().await;
    let client = client_for(&base_url, "/login");

    let err = client.login.submit(LoginRequest::new("alice", "wrong"), None).await.unwrap_err();

    assert_eq!(err, AuthError::Credential { message: "Bad credentials".to_owned() });
    assert!(client.store.token().is_none());
    assert!(client.navigator.visits().is_empty());
}

#[tokio::test]
async fn unauthenticated_entry_is_redirected_with_return_url() {
    let (base_url, _backend) = spawn_backend().await;
    let client = client_for(&base_url, "/");

    assert!(!client.guard.can_enter("/users"));
    assert_eq!(client.navigator.visits(), vec!["/login?returnUrl=/users".to_owned()]);
}

#[tokio::test]
async fn signed_in_requests_carry_the_bearer_token() {
    let (base_url, _backend) = spawn_backend().await;
    let client = client_for(&base_url, "/products");
    client.login.submit(LoginRequest::new("alice", "secret"), None).await.unwrap();

    let items = client.products.list().await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_name, "Widget");
}

#[tokio::test]
async fn revoked_token_signs_out_and_redirects() {
    let (base_url, backend) = spawn_backend().await;
    let client = client_for(&base_url, "/products");
    client.login.submit(LoginRequest::new("alice", "secret"), None).await.unwrap();
    backend.revoked.store(true, Ordering::SeqCst);

    let err = client.products.list().await.unwrap_err();

    assert_eq!(err, ApiError::AuthorizationExpired);
    assert!(client.store.token().is_none());
    assert_eq!(client.navigator.visits(), vec!["/login?returnUrl=/products".to_owned()]);
    assert!(!client.guard.can_enter("/products"));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = client_for("http://127.0.0.1:9", "/login");

    let err = client.login.submit(LoginRequest::new("alice", "secret"), None).await.unwrap_err();

    assert!(matches!(err, AuthError::Network { .. }));
    assert!(client.store.token().is_none());
}
