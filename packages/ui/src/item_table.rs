use api::{item_type_config, Item};
use dioxus::prelude::*;

use crate::ErrorMessage;

/// Searchable table of one item type, with the columns its registry entry lists.
#[component]
pub fn GenericItemTable(
    item_type: String,
    items: Vec<Item>,
    on_view: EventHandler<u64>,
    on_delete: EventHandler<u64>,
) -> Element {
    let mut search = use_signal(String::new);

    let config = match item_type_config(&item_type) {
        Ok(config) => config,
        Err(e) => return rsx! { ErrorMessage { message: e.to_string() } },
    };

    let plural = config.labels.plural.to_lowercase();
    let columns = config.table.columns;
    let rows: Vec<(u64, Vec<String>)> = config
        .filter_items(&items, &search())
        .into_iter()
        .map(|item| {
            let cells = columns.iter().map(|key| config.display_value(item, key)).collect();
            (item.id, cells)
        })
        .collect();
    let shown = rows.len();
    let total = items.len();

    rsx! {
        div {
            class: "item-table",
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search {plural}...",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }
            table {
                thead {
                    tr {
                        for key in columns.iter() {
                            th { key: "{key}", "{config.field_label(key)}" }
                        }
                        th { class: "actions", "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                class: "empty",
                                colspan: "{columns.len() + 1}",
                                "No {plural} found"
                            }
                        }
                    }
                    for (id, cells) in rows {
                        tr {
                            key: "{id}",
                            for (index, cell) in cells.into_iter().enumerate() {
                                td {
                                    class: if columns[index] == "name" { "name" },
                                    "{cell}"
                                }
                            }
                            td {
                                class: "actions",
                                button { onclick: move |_| on_view.call(id), "View" }
                                button { class: "danger", onclick: move |_| on_delete.call(id), "Delete" }
                            }
                        }
                    }
                }
            }
            p { class: "table-footer", "Showing {shown} of {total} {plural}" }
        }
    }
}
