//! Navigation seam and login-redirect URL helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard, the request authenticator and sign-out all send the user to the
//! login view through a [`Navigator`], carrying where they were headed so the
//! login view can resume there.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

pub const LOGIN_PATH: &str = "/login";
pub const RETURN_URL_PARAM: &str = "returnUrl";
pub const DEFAULT_RETURN_URL: &str = "/";

/// Client-side navigation. Implemented over the router in the browser and by
/// recorders in tests.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);

    /// Path (with query) of the view currently shown.
    fn current_path(&self) -> String;
}

/// Login view URL that returns to `return_to` after signing in.
#[must_use]
pub fn login_url(return_to: &str) -> String {
    if return_to.is_empty() || is_login_path(return_to) {
        return LOGIN_PATH.to_owned();
    }
    // `/` is legal inside a query component; keep paths readable.
    let encoded = urlencoding::encode(return_to).replace("%2F", "/");
    format!("{LOGIN_PATH}?{RETURN_URL_PARAM}={encoded}")
}

/// Turn a `returnUrl` query value into a safe in-app destination.
///
/// `raw` is the value as the router hands it over, already percent-decoded
/// once; it is used verbatim. Only same-origin absolute paths are accepted;
/// anything else (external URLs, protocol-relative `//host`, the login view
/// itself) falls back to `/`.
#[must_use]
pub fn sanitize_return_url(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return DEFAULT_RETURN_URL.to_owned();
    };
    let safe = raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\') && !is_login_path(raw);
    if safe { raw.to_owned() } else { DEFAULT_RETURN_URL.to_owned() }
}

/// Join a router pathname and raw query string into one in-app path.
#[must_use]
pub fn path_with_query(path: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { path.to_owned() } else { format!("{path}?{search}") }
}

fn is_login_path(path: &str) -> bool {
    path == LOGIN_PATH || path.starts_with("/login?") || path.starts_with("/login/")
}
