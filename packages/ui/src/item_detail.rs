use api::registry::FieldType;
use api::{display_timestamp, item_type_config, Item};
use dioxus::prelude::*;

use crate::ErrorMessage;

/// Every configured field of one item, its image, and its timestamps.
#[component]
pub fn GenericItemDetail(
    item_type: String,
    item: Item,
    on_back: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    let config = match item_type_config(&item_type) {
        Ok(config) => config,
        Err(e) => return rsx! { ErrorMessage { message: e.to_string() } },
    };

    let singular = config.labels.singular;
    let main_fields: Vec<(&str, String)> = config
        .fields
        .iter()
        .filter(|f| f.field_type != FieldType::Textarea)
        .map(|f| (f.label, config.display_value(&item, f.key)))
        .collect();
    let long_fields: Vec<(&str, String)> = config
        .fields
        .iter()
        .filter(|f| f.field_type == FieldType::Textarea)
        .map(|f| {
            let text = item
                .text_value(f.key)
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| "No description available".to_string());
            (f.label, text)
        })
        .collect();
    let created = display_timestamp(item.created_at);
    let updated = display_timestamp(item.updated_at);

    rsx! {
        div {
            class: "item-detail",
            div {
                class: "page-header",
                button { onclick: move |_| on_back.call(()), "Back to List" }
                h1 { "{item.name}" }
                button { class: "danger", onclick: move |_| on_delete.call(()), "Delete {singular}" }
            }
            if let Some(url) = item.image_url.as_ref().filter(|url| !url.is_empty()) {
                img { class: "item-image", src: "{url}", alt: "{item.name}" }
            }
            section {
                class: "card",
                h2 { "Basic Information" }
                p { class: "muted", "Details about this {singular.to_lowercase()}" }
                dl {
                    for (label, value) in main_fields {
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
            for (label, text) in long_fields {
                section {
                    class: "card",
                    h2 { "{label}" }
                    p { "{text}" }
                }
            }
            section {
                class: "card",
                h2 { "Metadata" }
                dl {
                    dt { "ID" }
                    dd { "{item.id}" }
                    dt { "Created" }
                    dd { "{created}" }
                    dt { "Updated" }
                    dd { "{updated}" }
                }
            }
        }
    }
}
