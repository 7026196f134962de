//! Async list/edit/delete plumbing shared by the resource pages.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::app::Pipeline;
use crate::components::notice::show_notice;
use crate::error::ApiError;
use crate::net::api::{CrudService, Resource};
use crate::state::forms::SaveAction;
use crate::util::browser::{confirm, spawn_task};

/// Which record, if any, the page's form dialog is showing.
#[derive(Clone, Debug, PartialEq)]
pub enum Editor<R> {
    Closed,
    Creating,
    Editing(R),
}

impl<R> Editor<R> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The stored record being edited; `None` for a new one.
    #[must_use]
    pub fn record(&self) -> Option<&R> {
        match self {
            Self::Editing(record) => Some(record),
            _ => None,
        }
    }
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Error text for a page notice, e.g. `Failed to load products. <reason>`.
/// `None` when the user is already being sent to the login view and nothing
/// should be shown.
pub fn failure_notice(action: &str, err: &ApiError) -> Option<String> {
    match err {
        ApiError::AuthorizationExpired => None,
        other => Some(format!("Failed to {action}. {}", other.user_message())),
    }
}

pub fn saved_notice<R: Resource>(action: SaveAction) -> String {
    format!("{} {} successfully", capitalized(R::NAME), action.past_tense())
}

pub fn deleted_notice<R: Resource>() -> String {
    format!("{} deleted successfully", capitalized(R::NAME))
}

pub fn delete_prompt<R: Resource>() -> String {
    format!("Are you sure you want to delete this {}?", R::NAME)
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn report(notice: RwSignal<Option<String>>, action: &str, err: &ApiError) {
    log::warn!("{action} failed: {err}");
    if let Some(message) = failure_notice(action, err) {
        show_notice(notice, message);
    }
}

// =============================================================================
// TASKS
// =============================================================================

/// Fetch the whole collection into `items`.
pub(crate) fn load_into<R>(
    service: Arc<CrudService<Pipeline, R>>,
    items: RwSignal<Vec<R>>,
    loading: RwSignal<bool>,
    notice: RwSignal<Option<String>>,
) where
    R: Resource + Send + Sync + 'static,
{
    loading.set(true);
    let started = spawn_task("list load", async move {
        match service.list().await {
            Ok(list) => items.set(list),
            Err(e) => report(notice, &format!("load {}s", R::NAME), &e),
        }
        loading.set(false);
    });
    if !started {
        loading.set(false);
    }
}

/// Fetch the current copy of one record and open the form on it.
pub(crate) fn open_editor<R>(
    service: Arc<CrudService<Pipeline, R>>,
    id: i64,
    editor: RwSignal<Editor<R>>,
    notice: RwSignal<Option<String>>,
) where
    R: Resource + Send + Sync + 'static,
{
    spawn_task("record load", async move {
        match service.get(id).await {
            Ok(record) => editor.set(Editor::Editing(record)),
            Err(e) => report(notice, &format!("load {}", R::NAME), &e),
        }
    });
}

/// Ask for confirmation, delete one record, then bump `reload` so the list is
/// fetched again.
pub(crate) fn delete_then_reload<R>(
    service: Arc<CrudService<Pipeline, R>>,
    id: i64,
    notice: RwSignal<Option<String>>,
    reload: RwSignal<u64>,
) where
    R: Resource + Send + Sync + 'static,
{
    if !confirm(&delete_prompt::<R>()) {
        return;
    }
    spawn_task("record delete", async move {
        match service.delete(id).await {
            Ok(()) => {
                show_notice(notice, deleted_notice::<R>());
                reload.update(|n| *n += 1);
            }
            Err(e) => report(notice, &format!("delete {}", R::NAME), &e),
        }
    });
}
