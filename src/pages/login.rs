//! Login page: username + password against `/auth/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entered directly or via a guard/authenticator redirect carrying
//! `?returnUrl=`. On success the session is saved before navigating, so the
//! destination's guard already sees it. A visitor who is already signed in is
//! sent straight on.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::ClientContext;
use crate::components::notice::{Notice, show_notice};
use crate::routing::{RETURN_URL_PARAM, sanitize_return_url};
use crate::state::login::{LoginOutcome, validate_login_input};
use crate::util::browser::spawn_task;

pub fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign In" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let query = use_query_map();
    let return_url = move || query.with_untracked(|params| params.get(RETURN_URL_PARAM));

    if ctx.store.is_authenticated() {
        ctx.navigator.navigate(&sanitize_return_url(return_url().as_deref()));
    }

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let login = ctx.login.clone();
    on_cleanup(move || login.abandon());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                show_notice(notice, message.to_owned());
                return;
            }
        };
        busy.set(true);
        notice.set(None);

        let ctx = ctx.clone();
        let return_url = return_url();
        let started = spawn_task("login submission", async move {
            match ctx.login.submit(request, return_url.as_deref()).await {
                Ok(LoginOutcome::SignedIn { redirect_to }) => {
                    password.set(String::new());
                    ctx.navigator.navigate(&redirect_to);
                }
                Ok(LoginOutcome::Superseded) => {}
                Err(e) => {
                    log::warn!("login failed: {e}");
                    show_notice(notice, e.user_message());
                    busy.set(false);
                }
            }
        });
        if !started {
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Gerenciador"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        name="username"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <Notice message=notice/>
            </div>
        </div>
    }
}
