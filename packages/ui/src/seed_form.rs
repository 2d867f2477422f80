//! Bulk import: validate first, then import what was validated.

use api::validation::{parse_seed_document, validate_seed_document, validate_seed_url};
use api::{item_type_config, ItemTypeConfig, QueryKey, SeedResult, SeedSource, ValidationResult};
use dioxus::prelude::*;

use crate::{use_query_cache, ErrorMessage};

#[derive(Debug, Clone, Copy, PartialEq)]
enum SourceMode {
    Url,
    Paste,
}

#[derive(Debug, Clone, PartialEq)]
enum SeedStep {
    Editing,
    Validating,
    Invalid(ValidationResult),
    Validated(ValidationResult),
    Importing,
    Imported(SeedResult),
}

/// Turn the form input into a request body, or the list of problems to show.
fn build_source(
    config: &ItemTypeConfig,
    mode: SourceMode,
    url: &str,
    document: &str,
) -> Result<SeedSource, Vec<String>> {
    match mode {
        SourceMode::Url => validate_seed_url(url)
            .map(|url| SeedSource::Url(url.into()))
            .map_err(|e| vec![e.to_string()]),
        SourceMode::Paste => {
            let document = parse_seed_document(document).map_err(|e| vec![e.to_string()])?;
            let problems = validate_seed_document(config, &document);
            if problems.is_empty() {
                Ok(SeedSource::Data(document))
            } else {
                Err(problems)
            }
        }
    }
}

#[component]
pub fn GenericSeedForm(
    item_type: String,
    on_back: EventHandler<()>,
    on_view_list: EventHandler<()>,
) -> Element {
    let mut cache = use_query_cache();
    let mut mode = use_signal(|| SourceMode::Url);
    let mut url = use_signal(String::new);
    let mut document = use_signal(String::new);
    let mut input_errors = use_signal(Vec::<String>::new);
    let mut request_error = use_signal(|| Option::<(&'static str, String)>::None);
    let mut step = use_signal(|| SeedStep::Editing);
    let mut validated_source = use_signal(|| Option::<SeedSource>::None);

    let config = match item_type_config(&item_type) {
        Ok(config) => config,
        Err(e) => return rsx! { ErrorMessage { message: e.to_string() } },
    };
    let plural = config.labels.plural;
    let plural_lower = plural.to_lowercase();
    let singular_lower = config.labels.singular.to_lowercase();
    let example = serde_json::to_string_pretty(&config.seed_example()).unwrap_or_default();

    let mut reset = move || {
        input_errors.set(Vec::new());
        request_error.set(None);
        validated_source.set(None);
        step.set(SeedStep::Editing);
    };

    let validate_type = item_type.clone();
    let handle_validate = move |evt: FormEvent| {
        evt.prevent_default();
        let item_type = validate_type.clone();
        input_errors.set(Vec::new());
        request_error.set(None);

        let source = match build_source(config, mode(), &url(), &document()) {
            Ok(source) => source,
            Err(problems) => {
                input_errors.set(problems);
                return;
            }
        };

        spawn(async move {
            step.set(SeedStep::Validating);
            match api::validate_items(item_type, source.clone()).await {
                Ok(result) if result.valid => {
                    validated_source.set(Some(source));
                    step.set(SeedStep::Validated(result));
                }
                Ok(result) => step.set(SeedStep::Invalid(result)),
                Err(e) => {
                    request_error.set(Some(("Validation Failed", e.to_string())));
                    step.set(SeedStep::Editing);
                }
            }
        });
    };

    let import_type = item_type.clone();
    let handle_import = move |_| {
        let item_type = import_type.clone();
        let Some(source) = validated_source() else {
            return;
        };
        spawn(async move {
            step.set(SeedStep::Importing);
            match api::seed_items(item_type.clone(), source).await {
                Ok(result) => {
                    cache.write().invalidate(&QueryKey::item_type(&item_type));
                    url.set(String::new());
                    document.set(String::new());
                    validated_source.set(None);
                    step.set(SeedStep::Imported(result));
                }
                Err(e) => {
                    request_error.set(Some(("Import Failed", e.to_string())));
                    step.set(SeedStep::Editing);
                }
            }
        });
    };

    let current = step();
    let busy = matches!(current, SeedStep::Validating | SeedStep::Importing);
    let ready_to_import = matches!(current, SeedStep::Validated(_) | SeedStep::Importing);
    let has_input = match mode() {
        SourceMode::Url => !url().trim().is_empty(),
        SourceMode::Paste => !document().trim().is_empty(),
    };

    rsx! {
        div {
            class: "seed-form",
            div {
                class: "page-header",
                button { onclick: move |_| on_back.call(()), "Back to List" }
                h1 { "Seed {plural} Data" }
            }
            section {
                class: "card",
                h2 { "Bulk Import" }
                p {
                    class: "muted",
                    "Import {plural_lower} from a remote JSON file or a pasted document. It should hold an array of {singular_lower} objects."
                }
                div {
                    class: "tabs",
                    button {
                        class: if mode() == SourceMode::Url { "active" },
                        disabled: busy,
                        onclick: move |_| {
                            mode.set(SourceMode::Url);
                            reset();
                        },
                        "From URL"
                    }
                    button {
                        class: if mode() == SourceMode::Paste { "active" },
                        disabled: busy,
                        onclick: move |_| {
                            mode.set(SourceMode::Paste);
                            reset();
                        },
                        "Paste JSON"
                    }
                }
                form {
                    onsubmit: handle_validate,
                    if mode() == SourceMode::Url {
                        label { r#for: "seed-url", "JSON File URL" }
                        input {
                            id: "seed-url",
                            r#type: "url",
                            placeholder: "https://example.com/{plural_lower}.json",
                            value: "{url}",
                            disabled: busy,
                            oninput: move |e| {
                                url.set(e.value());
                                reset();
                            },
                        }
                    } else {
                        label { r#for: "seed-json", "JSON Document" }
                        textarea {
                            id: "seed-json",
                            rows: "12",
                            value: "{document}",
                            disabled: busy,
                            oninput: move |e| {
                                document.set(e.value());
                                reset();
                            },
                        }
                    }
                    for problem in input_errors() {
                        p { class: "field-error", "{problem}" }
                    }
                    div {
                        class: "alert",
                        p { class: "alert-title", "Expected JSON Format" }
                        pre { "{example}" }
                    }
                    div {
                        class: "form-actions",
                        if ready_to_import {
                            button {
                                r#type: "button",
                                disabled: busy,
                                onclick: handle_import,
                                if busy { "Importing..." } else { "Import Data" }
                            }
                        } else {
                            button {
                                r#type: "submit",
                                disabled: busy || !has_input,
                                if busy { "Validating..." } else { "Validate Data" }
                            }
                        }
                    }
                }
                {match current {
                    SeedStep::Invalid(result) => rsx! {
                        div {
                            class: "alert alert-error",
                            p { class: "alert-title", "Validation Failed" }
                            ul {
                                for error in result.errors {
                                    li { "{error}" }
                                }
                            }
                        }
                    },
                    SeedStep::Validated(result) => rsx! {
                        div {
                            class: "alert alert-success",
                            p { class: "alert-title", "Validation Successful!" }
                            if result.item_count > 0 {
                                p { "{result.item_count} {plural_lower} found, {result.duplicates} already exist." }
                            }
                            p { "The JSON structure is valid and ready for import. Click \"Import Data\" to proceed." }
                        }
                    },
                    SeedStep::Imported(result) => rsx! {
                        div {
                            class: "alert alert-success",
                            p { class: "alert-title", "Import Successful!" }
                            ul {
                                li { "Added: {result.added} {plural_lower}" }
                                li { "Skipped: {result.skipped} (already exist)" }
                                if !result.errors.is_empty() {
                                    li { class: "field-error", "Errors: {result.errors.len()}" }
                                }
                            }
                            button { onclick: move |_| on_view_list.call(()), "View {plural}" }
                        }
                    },
                    _ => rsx! {},
                }}
                if let Some((title, message)) = request_error() {
                    ErrorMessage { title: title.to_string(), message }
                }
            }
            section {
                class: "card",
                h2 { "Import Process" }
                ul {
                    li { strong { "Step 1: " } "Validate JSON structure and format" }
                    li { strong { "Step 2: " } "Review validation results" }
                    li { strong { "Step 3: " } "Import data if validation passes" }
                    li { strong { "Duplicates: " } "Existing items are skipped, never overwritten" }
                }
            }
        }
    }
}
