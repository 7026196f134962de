//! Modal dialog for creating or editing a user.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;

use crate::app::ClientContext;
use crate::net::types::User;
use crate::pages::resource::failure_notice;
use crate::state::forms::{AVAILABLE_ROLES, SaveAction, UserDraft, save_record};
use crate::util::browser::spawn_task;

/// Checkbox caption for a role, without the `ROLE_` prefix.
pub fn role_label(role: &str) -> &str {
    role.strip_prefix("ROLE_").unwrap_or(role)
}

/// Password field hint; a blank password keeps the stored one on edit.
pub fn password_placeholder(action: SaveAction) -> &'static str {
    match action {
        SaveAction::Created => "Password",
        SaveAction::Updated => "Leave blank to keep current password",
    }
}

/// User form. `initial` is the stored record when editing, `None` for a new
/// user.
#[component]
pub fn UserForm(initial: Option<User>, on_saved: Callback<SaveAction>, on_cancel: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let action = SaveAction::for_id(initial.as_ref().and_then(|u| u.id));
    let draft = RwSignal::new(initial.as_ref().map(UserDraft::from_user).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let record = match draft.with_untracked(|d| d.validate(initial.as_ref())) {
            Ok(record) => record,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let service = ctx.users.clone();
        let started = spawn_task("user save", async move {
            match save_record(&*service, record.id, record).await {
                Ok(done) => on_saved.run(done),
                Err(e) => {
                    log::warn!("user {} failed: {e}", action.verb());
                    error.set(failure_notice(&format!("{} user", action.verb()), &e));
                    busy.set(false);
                }
            }
        });
        if !started {
            busy.set(false);
        }
    };

    let title = match action {
        SaveAction::Created => "New User",
        SaveAction::Updated => "Edit User",
    };

    let role_boxes = AVAILABLE_ROLES
        .into_iter()
        .map(|role| {
            view! {
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.roles.iter().any(|r| r == role))
                        on:change=move |_| draft.update(|d| d.toggle_role(role))
                    />
                    {role_label(role)}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog dialog--resource"
                on:click=move |ev| ev.stop_propagation()
                on:submit=on_submit
            >
                <h3 class="dialog__title">{title}</h3>
                <label class="dialog__label">
                    "Username"
                    <input
                        class="dialog__input"
                        type="text"
                        autocomplete="off"
                        prop:value=move || draft.with(|d| d.username.clone())
                        on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                        autofocus=true
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || draft.with(|d| d.email.clone())
                        on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        autocomplete="new-password"
                        placeholder=password_placeholder(action)
                        prop:value=move || draft.with(|d| d.password.clone())
                        on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                    />
                </label>
                <fieldset class="dialog__roles">
                    <legend>"Roles"</legend>
                    {role_boxes}
                </fieldset>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
