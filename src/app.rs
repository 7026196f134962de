//! Root component, route table and shared context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wires the session core into Leptos. A single [`ClientContext`] holds
//! the store, the guard, and the services that send through the request
//! authenticator; components fetch it with `expect_context`.
//!
//! DESIGN
//! ======
//! The core talks to the router through [`Navigator`], which must be
//! `Send + Sync` and callable from outside any reactive owner. The router's
//! own `use_navigate` closure is neither, so [`SignalNavigator`] only records
//! the requested path in a signal and [`NavigationBridge`], mounted inside the
//! router, performs the navigation and mirrors the current location back.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::header::Header;
use crate::components::require_session::RequireSession;
use crate::config::ClientConfig;
use crate::guard::RouteAccessGuard;
use crate::net::api::{ProductService, UserService};
use crate::net::auth::AuthenticationClient;
use crate::net::authenticator::RequestAuthenticator;
use crate::net::transport::SharedTransport;
use crate::pages::login::LoginPage;
use crate::pages::products::ProductsPage;
use crate::pages::users::UsersPage;
use crate::routing::{Navigator, path_with_query};
use crate::session::SessionStore;
use crate::state::login::LoginFlow;

/// Landing view for `/` and unknown paths.
pub const HOME_PATH: &str = "/products";

/// Transport every service sends through: the base transport wrapped by the
/// bearer-stamping authenticator.
pub type Pipeline = Arc<RequestAuthenticator<SharedTransport>>;

// =============================================================================
// CONTEXT
// =============================================================================

#[derive(Clone)]
pub struct ClientContext {
    pub store: SessionStore,
    pub navigator: Arc<dyn Navigator>,
    pub guard: RouteAccessGuard,
    pub login: Arc<LoginFlow<Pipeline>>,
    pub products: Arc<ProductService<Pipeline>>,
    pub users: Arc<UserService<Pipeline>>,
}

impl ClientContext {
    pub fn new(
        config: &ClientConfig,
        transport: SharedTransport,
        store: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let pipeline: Pipeline = Arc::new(
            RequestAuthenticator::new(transport, store.clone(), navigator.clone())
                .clear_session_on_forbidden(config.clear_session_on_forbidden),
        );
        Self {
            guard: RouteAccessGuard::new(store.clone(), navigator.clone()),
            login: Arc::new(LoginFlow::new(AuthenticationClient::new(pipeline.clone()), store.clone())),
            products: Arc::new(ProductService::new(pipeline.clone())),
            users: Arc::new(UserService::new(pipeline)),
            store,
            navigator,
        }
    }
}

/// Bumped whenever the session store changes so views reading the store can
/// re-run.
#[derive(Clone, Copy)]
pub struct SessionRevision(RwSignal<u64>);

impl SessionRevision {
    pub fn watch(store: &SessionStore) -> Self {
        let revision = RwSignal::new(0_u64);
        store.subscribe(move || {
            // The store may outlive the signal's owner.
            let _ = revision.try_update(|n| *n += 1);
        });
        Self(revision)
    }

    pub fn track(&self) {
        self.0.track();
    }

    pub fn get_untracked(&self) -> u64 {
        self.0.get_untracked()
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Clone, Copy)]
pub struct SignalNavigator {
    pending: RwSignal<Option<String>>,
    location: RwSignal<String>,
}

impl Default for SignalNavigator {
    fn default() -> Self {
        Self { pending: RwSignal::new(None), location: RwSignal::new("/".to_owned()) }
    }
}

impl Navigator for SignalNavigator {
    fn navigate(&self, path: &str) {
        self.pending.set(Some(path.to_owned()));
    }

    fn current_path(&self) -> String {
        self.location.get_untracked()
    }
}

/// Connects a [`SignalNavigator`] to the router. Renders nothing.
#[component]
pub fn NavigationBridge(navigator: SignalNavigator) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let search = location.search.get();
        navigator.location.set(path_with_query(&path, &search));
    });

    Effect::new(move || {
        if let Some(target) = navigator.pending.get() {
            navigator.pending.set(None);
            navigate(&target, NavigateOptions::default());
        }
    });
}

// =============================================================================
// APP
// =============================================================================

#[component]
pub fn App(config: ClientConfig, transport: SharedTransport, store: SessionStore) -> impl IntoView {
    provide_meta_context();

    let navigator = SignalNavigator::default();
    provide_context(SessionRevision::watch(&store));
    provide_context(ClientContext::new(&config, transport, store, Arc::new(navigator)));

    view! {
        <Title text="Gerenciador"/>
        <Router>
            <NavigationBridge navigator=navigator/>
            <Header/>
            <main class="app-content">
                <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("products")
                        view=|| view! { <RequireSession><ProductsPage/></RequireSession> }
                    />
                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <RequireSession><UsersPage/></RequireSession> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
