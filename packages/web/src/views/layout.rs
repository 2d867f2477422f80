use api::{all_item_types, item_type_config};
use dioxus::prelude::*;
use ui::{use_auth, ErrorMessage, LogoutButton, Navbar};

use crate::Route;

/// Shell of every signed-in page.
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // The server guard already redirects page loads; this covers an expired
    // session noticed after the app has started.
    use_effect(move || {
        let state = auth();
        if !state.loading && !state.signed_in() {
            nav.replace(Route::Login {
                error: String::new(),
            });
        }
    });

    let sections: Vec<(&'static str, &'static str)> = all_item_types()
        .filter_map(|t| item_type_config(t).ok().map(|c| (t, c.labels.plural)))
        .collect();
    let admin_label = auth().admin.map(|admin| admin.label().to_string());

    rsx! {
        Navbar {
            title: "A la carte Admin",
            Link { to: Route::Dashboard {}, "Dashboard" }
            for (item_type, plural) in sections {
                Link {
                    key: "{item_type}",
                    to: Route::ItemList { item_type: item_type.to_string() },
                    "{plural}"
                }
            }
            Link { to: Route::UserList {}, "Users" }
            if let Some(label) = admin_label {
                span { class: "navbar-user", "{label}" }
            }
            LogoutButton { class: "navbar-logout" }
        }
        main {
            class: "content",
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        main {
            class: "content",
            ErrorMessage { title: "Page not found", message: "Nothing lives at /{path}." }
            Link { to: Route::Dashboard {}, "Back to Dashboard" }
        }
    }
}
