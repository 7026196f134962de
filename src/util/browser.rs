//! Browser task and dialog helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views start async work and ask for confirmation through these two calls.
//! Both need a browser, which only the `csr` build has. Native builds (tests,
//! tooling) report that the action was not performed instead of doing it.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::future::Future;

/// Run `task` on the browser's event loop. Returns `false`, after logging,
/// when there is no browser to run it on.
pub fn spawn_task(label: &str, task: impl Future<Output = ()> + 'static) -> bool {
    #[cfg(feature = "csr")]
    {
        log::debug!("starting {label}");
        leptos::task::spawn_local(task);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(task);
        log::warn!("{label} skipped: async view actions need the `csr` feature");
        false
    }
}

/// Modal yes/no prompt. Anything other than an explicit yes is a no.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("confirmation {message:?} declined: no browser");
        false
    }
}
