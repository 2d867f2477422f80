//! # Item-type registry
//!
//! Every catalog category the dashboard manages (cheese, gin, wine, coffee) is
//! described by one [`ItemTypeConfig`]. Tables, detail pages, the bulk-import form
//! and the backend routes are all derived from this table, so adding a category is
//! a matter of adding one entry to [`ITEM_TYPES`].
//!
//! The registry is plain static data and compiles for every target, which lets the
//! browser build use it directly without a round trip.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`FieldConfig`] | One editable/displayed field: type, label, constraints |
//! | [`TableConfig`] | Which fields the list view shows, searches and sorts on |
//! | [`ApiEndpoints`] | Backend route templates, `{id}` is substituted per record |
//! | [`item_type_config`] | Lookup by key, `UnknownItemType` on miss |

mod catalog;

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::error::{AdminError, AdminResult};
use crate::models::Item;

pub use catalog::ITEM_TYPES;

/// Input widget / value kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Select,
    Checkbox,
}

/// One choice of a [`FieldType::Select`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    /// An option whose label is its value, which is how the backend enums are shown.
    pub const fn same(value: &'static str) -> Self {
        Self {
            value,
            label: value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    pub key: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub placeholder: Option<&'static str>,
    pub helper_text: Option<&'static str>,
    pub options: &'static [SelectOption],
}

impl FieldConfig {
    pub const fn new(key: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            key,
            label,
            field_type,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            placeholder: None,
            helper_text: None,
            options: &[],
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Text)
    }

    pub const fn textarea(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Textarea)
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Number)
    }

    pub const fn checkbox(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Checkbox)
    }

    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        let mut field = Self::new(key, label, FieldType::Select);
        field.options = options;
        field
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub const fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub const fn helper(mut self, text: &'static str) -> Self {
        self.helper_text = Some(text);
        self
    }

    /// Label of the option whose value is `value`, if any.
    pub fn option_label(&self, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|opt| opt.value == value)
            .map(|opt| opt.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub columns: &'static [&'static str],
    pub searchable_fields: &'static [&'static str],
    pub default_sort: Option<&'static str>,
    pub sort_order: SortOrder,
}

/// Backend route templates for one item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiEndpoints {
    pub list: &'static str,
    pub detail: &'static str,
    pub delete_impact: &'static str,
    pub delete: &'static str,
    pub seed: &'static str,
    pub validate: Option<&'static str>,
}

impl ApiEndpoints {
    pub fn detail_path(&self, id: u64) -> String {
        fill_id(self.detail, id)
    }

    pub fn delete_path(&self, id: u64) -> String {
        fill_id(self.delete, id)
    }

    pub fn delete_impact_path(&self, id: u64) -> String {
        fill_id(self.delete_impact, id)
    }
}

fn fill_id(template: &str, id: u64) -> String {
    template.replace("{id}", &id.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub singular: &'static str,
    pub plural: &'static str,
}

/// Complete description of one item type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTypeConfig {
    pub name: &'static str,
    pub labels: Labels,
    pub fields: &'static [FieldConfig],
    pub table: TableConfig,
    pub endpoints: ApiEndpoints,
}

impl ItemTypeConfig {
    pub fn field(&self, key: &str) -> Option<&'static FieldConfig> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Label of a configured field, or the key itself for unconfigured columns.
    pub fn field_label<'a>(&self, key: &'a str) -> &'a str {
        match self.field(key) {
            Some(field) => field.label,
            None => key,
        }
    }

    /// Display text of one field. Select values show their option label.
    pub fn display_value(&self, item: &Item, key: &str) -> String {
        let text = item.display_value(key);
        self.field(key)
            .and_then(|field| field.option_label(&text))
            .map_or(text, str::to_string)
    }

    /// Items matching `term` in any searchable field, case-insensitively.
    pub fn filter_items<'a>(&self, items: &'a [Item], term: &str) -> Vec<&'a Item> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return items.iter().collect();
        }
        items
            .iter()
            .filter(|item| {
                self.table.searchable_fields.iter().any(|key| {
                    item.text_value(key)
                        .is_some_and(|text| text.to_lowercase().contains(&needle))
                })
            })
            .collect()
    }

    /// Sort in place by the table's default sort column. Missing values go last.
    pub fn sort_items(&self, items: &mut [Item]) {
        let Some(key) = self.table.default_sort else {
            return;
        };
        let order = self.table.sort_order;
        items.sort_by(|a, b| {
            let (left, right) = (a.field(key), b.field(key));
            match (is_blank(&left), is_blank(&right)) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let ord = compare_values(left.as_ref(), right.as_ref());
                    match order {
                        SortOrder::Asc => ord,
                        SortOrder::Desc => ord.reverse(),
                    }
                }
            }
        });
    }

    /// Key under which an upload document carries its records, e.g. `"cheeses"`.
    pub fn seed_collection_key(&self) -> String {
        self.labels.plural.to_lowercase()
    }

    /// Example upload document listing every required field.
    pub fn seed_example(&self) -> Value {
        let record: Map<String, Value> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| {
                let sample = match f.placeholder {
                    Some(text) => text.to_string(),
                    None => format!("Example {}", f.label.to_lowercase()),
                };
                (f.key.to_string(), Value::String(sample))
            })
            .collect();
        let mut document = Map::new();
        document.insert(
            self.seed_collection_key(),
            Value::Array(vec![Value::Object(record)]),
        );
        Value::Object(document)
    }
}

fn is_blank(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let (a, b) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(a), Some(b)) => value_text(a).to_lowercase().cmp(&value_text(b).to_lowercase()),
        _ => Ordering::Equal,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Look up an item type by key.
pub fn item_type_config(item_type: &str) -> AdminResult<&'static ItemTypeConfig> {
    ITEM_TYPES
        .iter()
        .find(|config| config.name == item_type)
        .ok_or_else(|| AdminError::UnknownItemType(item_type.to_string()))
}

/// Keys of all registered item types, in registration order.
pub fn all_item_types() -> impl Iterator<Item = &'static str> {
    ITEM_TYPES.iter().map(|config| config.name)
}

pub fn is_valid_item_type(item_type: &str) -> bool {
    ITEM_TYPES.iter().any(|config| config.name == item_type)
}
