//! Which pages need a signed-in administrator.
//!
//! Applied by the web server as middleware before any page is rendered. Server
//! functions do their own session check, so `/api` is never redirected.

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Path prefixes served without a session: server functions, the OAuth callback,
/// bundled assets and the Dioxus runtime.
const UNGUARDED_PREFIXES: &[&str] = &["/api", "/auth", "/assets", "/_dioxus", "/wasm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    Redirect(&'static str),
}

pub fn is_unguarded(path: &str) -> bool {
    if path == "/favicon.ico" {
        return true;
    }
    UNGUARDED_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

pub fn route_access(path: &str, signed_in: bool) -> RouteAccess {
    if is_unguarded(path) {
        return RouteAccess::Allow;
    }
    let on_login = path.trim_end_matches('/') == LOGIN_PATH;
    match (on_login, signed_in) {
        (true, true) => RouteAccess::Redirect(HOME_PATH),
        (true, false) | (false, true) => RouteAccess::Allow,
        (false, false) => RouteAccess::Redirect(LOGIN_PATH),
    }
}
