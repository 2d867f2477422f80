//! # Authentication
//!
//! Administrators sign in with Google. The Google tokens are handed to the backend,
//! which issues its own session token and tells us whether the account is an
//! administrator. Only that backend token and a browser-safe copy of the user are
//! kept, in the server-side session.
//!
//! ```text
//! /login ──get_login_url──▶ Google ──▶ /auth/google/callback
//!                                        │ complete_google_sign_in
//!                                        ├─ POST {backend}/auth/google
//!                                        ├─ GET  {backend}/api/auth/check-admin
//!                                        └─ session["admin"] = AdminSession
//! ```
//!
//! Failures anywhere in that pipeline are reduced to an [`AuthErrorKind`] and sent
//! back to `/login?error=<code>`. The error kinds and the route guard compile for
//! every target; everything touching OAuth, HTTP or sessions is server-only.

mod failure;
mod guard;

#[cfg(feature = "server")]
mod bridge;
#[cfg(feature = "server")]
mod callback;
#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod google;
#[cfg(feature = "server")]
mod session;

pub use failure::{AuthErrorKind, AuthErrorMessage};
pub use guard::{is_unguarded, route_access, RouteAccess, HOME_PATH, LOGIN_PATH};

#[cfg(feature = "server")]
pub use bridge::AuthBridge;
#[cfg(feature = "server")]
pub use callback::{complete_google_sign_in, CallbackParams};
#[cfg(feature = "server")]
pub use config::OAuthConfig;
#[cfg(feature = "server")]
pub use google::{GoogleOAuth, GoogleTokens, PendingLogin};
#[cfg(feature = "server")]
pub use session::{
    current_admin, is_signed_in, remember_pending_login, require_admin, store_admin,
    take_pending_login, AdminSession, PendingOAuth, SESSION_ADMIN_KEY, SESSION_OAUTH_KEY,
};
