//! Top bar with navigation, the signed-in username and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is one of the three readers of the session store. It re-reads
//! the store whenever [`SessionRevision`] changes, so a save, a logout, or a
//! `401` clear from the request authenticator all update it immediately.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::{ClientContext, SessionRevision};
use crate::state::login::sign_out;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let revision = expect_context::<SessionRevision>();

    let store = ctx.store.clone();
    let username = Signal::derive(move || {
        revision.track();
        store.current_user().map(|user| user.username)
    });

    let account = move || match username.get() {
        Some(name) => {
            let ctx = ctx.clone();
            view! {
                <nav class="app-header__nav">
                    <a href="/products">"Products"</a>
                    <a href="/users">"Users"</a>
                </nav>
                <span class="app-header__user">{name}</span>
                <button
                    class="app-header__logout"
                    type="button"
                    on:click=move |_| sign_out(&ctx.store, ctx.navigator.as_ref())
                >
                    "Logout"
                </button>
            }
            .into_any()
        }
        None => ().into_any(),
    };

    view! {
        <header class="app-header">
            <span class="app-header__title">"Gerenciador"</span>
            {account}
        </header>
    }
}
