//! Transient inline notices for failed actions.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::time::Duration;

use leptos::prelude::*;

/// How long a notice stays up before it clears itself.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Show `message`, then clear it after [`NOTICE_DURATION`] unless a newer
/// message replaced it first.
pub fn show_notice(notice: RwSignal<Option<String>>, message: String) {
    #[cfg(feature = "csr")]
    {
        let shown = message.clone();
        set_timeout(
            move || {
                if notice.try_get_untracked().flatten().as_deref() == Some(shown.as_str()) {
                    let _ = notice.try_set(None);
                }
            },
            NOTICE_DURATION,
        );
    }
    notice.set(Some(message));
}

#[component]
pub fn Notice(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="notice" role="alert">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
