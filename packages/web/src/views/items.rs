//! Pages for one item type. Each outer page checks the type against the registry;
//! the inner component is keyed on the route parameters so a new type or id
//! mounts fresh queries.

use api::{is_valid_item_type, item_type_config, QueryKey};
use dioxus::prelude::*;
use ui::{
    use_cached_query, use_query_cache, DeleteImpactPanel, ErrorMessage, GenericItemDetail,
    GenericItemTable, GenericSeedForm, QueryState,
};

use super::{both, Loading};
use crate::Route;

#[component]
fn UnknownItemType(item_type: String) -> Element {
    rsx! {
        ErrorMessage {
            title: "Unknown item type",
            message: "There is no item type called \"{item_type}\".",
        }
        Link { to: Route::Dashboard {}, "Back to Dashboard" }
    }
}

#[component]
pub fn ItemList(item_type: String) -> Element {
    if !is_valid_item_type(&item_type) {
        return rsx! { UnknownItemType { item_type } };
    }
    rsx! {
        ItemListContent { key: "{item_type}", item_type }
    }
}

#[component]
fn ItemListContent(item_type: String) -> Element {
    let nav = use_navigator();
    let fetch_type = item_type.clone();
    let items = use_cached_query(QueryKey::item_list(&item_type), move || {
        api::list_items(fetch_type.clone())
    });

    let Ok(config) = item_type_config(&item_type) else {
        return rsx! { UnknownItemType { item_type } };
    };
    let plural = config.labels.plural;
    let plural_lower = plural.to_lowercase();

    let view_type = item_type.clone();
    let delete_type = item_type.clone();
    let seed_type = item_type.clone();

    rsx! {
        div {
            class: "page-header",
            div {
                h1 { "{plural} Management" }
                p { class: "muted", "Manage {plural_lower} items and bulk import data" }
            }
            button {
                onclick: move |_| {
                    nav.push(Route::ItemSeed { item_type: seed_type.clone() });
                },
                "Seed Data"
            }
        }
        section {
            class: "card",
            h2 { "All {plural}" }
            {match items() {
                QueryState::Loading => rsx! { Loading { text: "Loading {plural_lower}..." } },
                QueryState::Failed(message) => rsx! { ErrorMessage { message } },
                QueryState::Ready(items) => rsx! {
                    GenericItemTable {
                        item_type: item_type.clone(),
                        items,
                        on_view: move |id| {
                            nav.push(Route::ItemView { item_type: view_type.clone(), id });
                        },
                        on_delete: move |id| {
                            nav.push(Route::ItemDelete { item_type: delete_type.clone(), id });
                        },
                    }
                },
            }}
        }
    }
}

#[component]
pub fn ItemView(item_type: String, id: u64) -> Element {
    if !is_valid_item_type(&item_type) {
        return rsx! { UnknownItemType { item_type } };
    }
    rsx! {
        ItemViewContent { key: "{item_type}/{id}", item_type, id }
    }
}

#[component]
fn ItemViewContent(item_type: String, id: u64) -> Element {
    let nav = use_navigator();
    let fetch_type = item_type.clone();
    let item = use_cached_query(QueryKey::item(&item_type, id), move || {
        api::get_item(fetch_type.clone(), id)
    });

    let back_type = item_type.clone();
    let delete_type = item_type.clone();

    match item() {
        QueryState::Loading => rsx! { Loading {} },
        QueryState::Failed(message) => rsx! { ErrorMessage { message } },
        QueryState::Ready(item) => rsx! {
            GenericItemDetail {
                item_type: item_type.clone(),
                item,
                on_back: move |_| {
                    nav.push(Route::ItemList { item_type: back_type.clone() });
                },
                on_delete: move |_| {
                    nav.push(Route::ItemDelete { item_type: delete_type.clone(), id });
                },
            }
        },
    }
}

#[component]
pub fn ItemDelete(item_type: String, id: u64) -> Element {
    if !is_valid_item_type(&item_type) {
        return rsx! { UnknownItemType { item_type } };
    }
    rsx! {
        ItemDeleteContent { key: "{item_type}/{id}", item_type, id }
    }
}

#[component]
fn ItemDeleteContent(item_type: String, id: u64) -> Element {
    let nav = use_navigator();
    let mut cache = use_query_cache();
    let mut deleting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let item_fetch_type = item_type.clone();
    let item = use_cached_query(QueryKey::item(&item_type, id), move || {
        api::get_item(item_fetch_type.clone(), id)
    });
    let impact_fetch_type = item_type.clone();
    let impact = use_cached_query(QueryKey::item_delete_impact(&item_type, id), move || {
        api::get_item_delete_impact(impact_fetch_type.clone(), id)
    });

    let Ok(config) = item_type_config(&item_type) else {
        return rsx! { UnknownItemType { item_type } };
    };
    let singular = config.labels.singular;

    let confirm_type = item_type.clone();
    let on_confirm = move |_| {
        let item_type = confirm_type.clone();
        spawn(async move {
            deleting.set(true);
            error.set(None);
            match api::delete_item(item_type.clone(), id).await {
                Ok(()) => {
                    cache.write().invalidate(&QueryKey::item_type(&item_type));
                    nav.push(Route::ItemList { item_type });
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    deleting.set(false);
                }
            }
        });
    };
    let cancel_type = item_type.clone();
    let on_cancel = move |_| {
        nav.push(Route::ItemView { item_type: cancel_type.clone(), id });
    };

    match both(&item(), &impact()) {
        QueryState::Loading => rsx! { Loading { text: "Analyzing delete impact..." } },
        QueryState::Failed(message) => rsx! { ErrorMessage { message } },
        QueryState::Ready((item, impact)) => {
            let name = item.display_value("name");
            rsx! {
                DeleteImpactPanel {
                    subject: "{singular}: {name}",
                    noun: singular.to_lowercase(),
                    impact,
                    deleting: deleting(),
                    error: error(),
                    on_confirm,
                    on_cancel,
                }
            }
        }
    }
}

#[component]
pub fn ItemSeed(item_type: String) -> Element {
    let nav = use_navigator();
    if !is_valid_item_type(&item_type) {
        return rsx! { UnknownItemType { item_type } };
    }
    let back_type = item_type.clone();
    let list_type = item_type.clone();

    rsx! {
        GenericSeedForm {
            key: "{item_type}",
            item_type,
            on_back: move |_| {
                nav.push(Route::ItemList { item_type: back_type.clone() });
            },
            on_view_list: move |_| {
                nav.push(Route::ItemList { item_type: list_type.clone() });
            },
        }
    }
}
