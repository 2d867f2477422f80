use dioxus::prelude::*;
use ui::{use_auth, DashboardStats};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    let auth = use_auth();

    rsx! {
        h1 { "Dashboard" }
        DashboardStats {
            on_select_type: move |item_type: String| {
                nav.push(Route::ItemList { item_type });
            },
            on_select_users: move |_| {
                nav.push(Route::UserList {});
            },
        }
        section {
            class: "card",
            h2 { "Welcome to A la carte Admin Panel" }
            p { "Manage your items, users, and ratings from this admin interface." }
            if let Some(admin) = auth().admin {
                p { class: "muted", "Logged in as: {admin.email}" }
            }
        }
    }
}
