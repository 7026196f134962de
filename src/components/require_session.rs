//! Route wrapper that consults [`crate::guard::RouteAccessGuard`] on entry.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::ClientContext;
use crate::routing::path_with_query;

/// Renders `children` only if the guard admits the current path. A refused
/// entry has already been redirected to the login view by the guard.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let location = use_location();

    let target = path_with_query(&location.pathname.get_untracked(), &location.search.get_untracked());
    let allowed = ctx.guard.can_enter(&target);

    view! { <Show when=move || allowed>{children()}</Show> }
}
