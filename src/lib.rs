//! # gerenciador-client
//!
//! Leptos + WASM frontend for the GerenciadorJwtAuth REST backend.
//!
//! The crate is organised around one shared piece of state, the tab-scoped
//! [`session::SessionStore`]. Three independent consumers read it:
//! [`guard::RouteAccessGuard`] before protected views are entered,
//! [`net::authenticator::RequestAuthenticator`] on every outbound request, and
//! the header component. [`net::auth::AuthenticationClient`] is the only code
//! that turns credentials into a [`net::types::Session`].
//!
//! Browser glue (sessionStorage, fetch, mounting) is gated behind the `csr`
//! feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routing;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::ClientConfig;
pub use error::{ApiError, AuthError, ConfigError, SessionError, TransportError};
pub use guard::RouteAccessGuard;
pub use net::auth::AuthenticationClient;
pub use net::authenticator::RequestAuthenticator;
pub use net::types::{LoginRequest, Session, Subject};
pub use routing::Navigator;
pub use session::SessionStore;

/// Browser entry point: installs console logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;
    use std::sync::Arc;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match ClientConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid build configuration, using defaults: {e}");
            ClientConfig::default()
        }
    };
    let transport: net::transport::SharedTransport =
        Arc::new(net::transport::GlooTransport::new(config.api_base_url.clone()));
    let store = SessionStore::browser();

    leptos::mount::mount_to_body(move || view! { <App config=config transport=transport store=store/> });
}
