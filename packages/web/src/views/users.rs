use api::QueryKey;
use dioxus::prelude::*;
use ui::{
    use_cached_query, use_query_cache, DeleteImpactPanel, ErrorMessage, QueryState, UserDetail,
    UserTable,
};

use super::{both, Loading};
use crate::Route;

#[component]
pub fn UserList() -> Element {
    let nav = use_navigator();
    let users = use_cached_query(QueryKey::user_list(), api::list_users);

    rsx! {
        div {
            class: "page-header",
            h1 { "User Management" }
        }
        section {
            class: "card",
            {match users() {
                QueryState::Loading => rsx! { Loading { text: "Loading users..." } },
                QueryState::Failed(message) => rsx! {
                    ErrorMessage { title: "Failed to load users", message }
                },
                QueryState::Ready(users) => rsx! {
                    UserTable {
                        users,
                        on_view: move |id| {
                            nav.push(Route::UserView { id });
                        },
                    }
                },
            }}
        }
    }
}

#[component]
pub fn UserView(id: u64) -> Element {
    rsx! {
        UserViewContent { key: "{id}", id }
    }
}

#[component]
fn UserViewContent(id: u64) -> Element {
    let nav = use_navigator();
    let user = use_cached_query(QueryKey::user(id), move || api::get_user(id));

    match user() {
        QueryState::Loading => rsx! { Loading {} },
        QueryState::Failed(message) => rsx! { ErrorMessage { title: "User not found", message } },
        QueryState::Ready(user) => rsx! {
            UserDetail {
                user,
                on_back: move |_| {
                    nav.push(Route::UserList {});
                },
                on_delete: move |id| {
                    nav.push(Route::UserDelete { id });
                },
            }
        },
    }
}

#[component]
pub fn UserDelete(id: u64) -> Element {
    rsx! {
        UserDeleteContent { key: "{id}", id }
    }
}

#[component]
fn UserDeleteContent(id: u64) -> Element {
    let nav = use_navigator();
    let mut cache = use_query_cache();
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let user = use_cached_query(QueryKey::user(id), move || api::get_user(id));
    let impact = use_cached_query(QueryKey::user_delete_impact(id), move || {
        api::get_user_delete_impact(id)
    });

    let on_confirm = move |_| {
        spawn(async move {
            deleting.set(true);
            error.set(None);
            match api::delete_user(id).await {
                Ok(()) => {
                    cache.write().invalidate(&QueryKey::users());
                    nav.push(Route::UserList {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    deleting.set(false);
                }
            }
        });
    };

    match both(&user(), &impact()) {
        QueryState::Loading => rsx! { Loading { text: "Analyzing delete impact..." } },
        QueryState::Failed(message) => rsx! { ErrorMessage { message } },
        QueryState::Ready((user, impact)) => rsx! {
            DeleteImpactPanel {
                subject: "User: {user.label()}",
                noun: "user",
                impact,
                deleting: deleting(),
                error: error(),
                on_confirm,
                on_cancel: move |_| {
                    nav.push(Route::UserView { id });
                },
            }
        },
    }
}
