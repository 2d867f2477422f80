//! Authentication context and hooks for the UI.

use api::auth::{AuthErrorKind, AuthErrorMessage, LOGIN_PATH};
use api::AdminUser;
use dioxus::prelude::*;

use crate::query::use_query_cache;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub admin: Option<AdminUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            admin: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(&self) -> bool {
        self.admin.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the administrator logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the signed-in administrator on mount
    let _ = use_resource(move || async move {
        let admin = match api::get_current_admin().await {
            Ok(admin) => admin,
            Err(e) => {
                tracing::warn!("Failed to load session: {}", e);
                None
            }
        };
        auth_state.set(AuthState {
            admin,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Full-page navigation, needed to leave the single-page app for Google.
fn navigate_to(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("Cannot navigate to {} outside the browser", url);
    }
}

/// Button that starts the Google sign-in.
#[component]
pub fn LoginButton(
    #[props(default = "Sign in with Google".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut loading = use_signal(|| false);

    let onclick = move |_| async move {
        loading.set(true);
        match api::get_login_url().await {
            Ok(url) => navigate_to(&url),
            Err(e) => {
                tracing::error!("Failed to get login URL: {}", e);
                loading.set(false);
                navigate_to(&AuthErrorKind::Configuration.login_redirect());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() {
                "Loading..."
            } else {
                "{label}"
            }
        }
    }
}

/// Button to log out the current administrator.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let mut cache = use_query_cache();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState {
                    admin: None,
                    loading: false,
                });
                cache.write().clear();
                navigate_to(LOGIN_PATH);
            }
            Err(e) => tracing::error!("Logout failed: {}", e),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Alert for the `error` query parameter of the login page. Renders nothing when
/// there is no error.
#[component]
pub fn AuthErrorAlert(code: Option<String>) -> Element {
    let Some(message) = AuthErrorMessage::for_code(code.as_deref()) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "alert alert-error",
            role: "alert",
            p { class: "alert-title", "{message.title}" }
            p { class: "alert-description", "{message.description}" }
        }
    }
}
