//! Users list with create, edit and delete.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use super::resource::{Editor, delete_then_reload, load_into, open_editor, saved_notice};
use crate::app::ClientContext;
use crate::components::notice::{Notice, show_notice};
use crate::components::user_form::{UserForm, role_label};
use crate::net::types::User;
use crate::state::forms::SaveAction;

/// Roles cell text: `ROLE_` prefixes dropped, comma separated.
pub fn format_roles(roles: &[String]) -> String {
    roles
        .iter()
        .map(String::as_str)
        .map(role_label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u64);
    let editor = RwSignal::new(Editor::<User>::Closed);

    let service = ctx.users.clone();
    Effect::new(move || {
        reload.track();
        load_into(service.clone(), users, loading, notice);
    });

    let on_saved = Callback::new(move |action: SaveAction| {
        editor.set(Editor::Closed);
        show_notice(notice, saved_notice::<User>(action));
        reload.update(|n| *n += 1);
    });
    let on_cancel = Callback::new(move |()| editor.set(Editor::Closed));

    let row_service = ctx.users;
    view! {
        <section class="resource-page">
            <div class="resource-page__header">
                <h2>"Users"</h2>
                <button class="btn btn--primary" type="button" on:click=move |_| editor.set(Editor::Creating)>
                    "New"
                </button>
            </div>
            <Notice message=notice/>
            <Show when=move || loading.get()>
                <p class="resource-page__loading">"Loading..."</p>
            </Show>
            <table class="resource-table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Roles"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| user.id
                        children=move |user: User| {
                            let edit_service = row_service.clone();
                            let delete_service = row_service.clone();
                            let id = user.id;
                            let roles = format_roles(&user.roles);
                            view! {
                                <tr>
                                    <td>{user.username}</td>
                                    <td>{user.email}</td>
                                    <td>{roles}</td>
                                    <td class="resource-table__actions">
                                        <button
                                            class="resource-table__edit"
                                            type="button"
                                            disabled=id.is_none()
                                            on:click=move |_| {
                                                if let Some(id) = id {
                                                    open_editor(edit_service.clone(), id, editor, notice);
                                                }
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="resource-table__delete"
                                            type="button"
                                            disabled=id.is_none()
                                            on:click=move |_| {
                                                if let Some(id) = id {
                                                    delete_then_reload(delete_service.clone(), id, notice, reload);
                                                }
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            {move || {
                let state = editor.get();
                state.is_open().then(|| {
                    view! { <UserForm initial=state.record().cloned() on_saved=on_saved on_cancel=on_cancel/> }
                })
            }}
        </section>
    }
}
