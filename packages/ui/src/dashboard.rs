use api::{all_item_types, item_type_config, QueryKey};
use dioxus::prelude::*;

use crate::{use_cached_query, QueryState};

fn count_label<T>(state: &QueryState<Vec<T>>, singular: &str, plural: &str) -> String {
    match state {
        QueryState::Loading => "Loading...".to_string(),
        QueryState::Ready(rows) if rows.len() == 1 => format!("1 {singular} in database"),
        QueryState::Ready(rows) => format!("{} {plural} in database", rows.len()),
        QueryState::Failed(_) => "Count unavailable".to_string(),
    }
}

/// One card per item type plus the user count. Counts come from the same cached
/// list queries the list pages use.
#[component]
pub fn DashboardStats(on_select_type: EventHandler<String>, on_select_users: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "dashboard-stats",
            div {
                class: "stat-grid",
                for item_type in all_item_types() {
                    ItemTypeStat {
                        key: "{item_type}",
                        item_type: item_type.to_string(),
                        on_select: on_select_type,
                    }
                }
            }
            UserStat { on_select: on_select_users }
        }
    }
}

#[component]
fn ItemTypeStat(item_type: String, on_select: EventHandler<String>) -> Element {
    let key = QueryKey::item_list(&item_type);
    let fetch_type = item_type.clone();
    let items = use_cached_query(key, move || api::list_items(fetch_type.clone()));

    let Ok(config) = item_type_config(&item_type) else {
        return rsx! {};
    };
    let label = count_label(
        &items(),
        &config.labels.singular.to_lowercase(),
        &config.labels.plural.to_lowercase(),
    );

    rsx! {
        button {
            class: "card stat-card",
            onclick: move |_| on_select.call(item_type.clone()),
            h3 { "{config.labels.plural}" }
            p { class: "muted", "{label}" }
        }
    }
}

#[component]
fn UserStat(on_select: EventHandler<()>) -> Element {
    let users = use_cached_query(QueryKey::user_list(), api::list_users);
    let label = count_label(&users(), "user", "users");

    rsx! {
        button {
            class: "card stat-card",
            onclick: move |_| on_select.call(()),
            h3 { "Users" }
            p { class: "muted", "{label}" }
            p { class: "link", "View all users" }
        }
    }
}
