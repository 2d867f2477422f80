//! Sign-in page. Google redirects back here with `?error=<code>` on failure.

use dioxus::prelude::*;
use ui::{use_auth, AuthErrorAlert, LoginButton};

use crate::Route;

#[component]
pub fn Login(error: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in, go to the dashboard
    use_effect(move || {
        let state = auth();
        if !state.loading && state.signed_in() {
            nav.replace(Route::Dashboard {});
        }
    });

    let code = (!error.is_empty()).then_some(error);

    rsx! {
        div {
            class: "login-container",
            div {
                class: "card login-card",
                h1 { "A la carte Admin" }
                p { class: "muted", "Sign in with an administrator account to continue." }
                AuthErrorAlert { code }
                LoginButton { class: "login-btn" }
            }
        }
    }
}
