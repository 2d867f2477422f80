//! # Catalog item
//!
//! Item types only share a handful of columns (`id`, `name`, `image_url` and the
//! timestamps). Everything else is type specific and kept in [`Item::fields`] as raw
//! JSON, keyed by the field names used in the item-type registry.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend columns that have no meaning in the dashboard.
const DROPPED_KEYS: &[&str] = &["DeletedAt", "deleted_at", "Ratings", "ratings"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawItem")]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(alias = "ID")]
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default, alias = "CreatedAt")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "UpdatedAt")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        let mut fields = raw.fields;
        fields.retain(|key, _| !DROPPED_KEYS.contains(&key.as_str()));
        Self {
            id: raw.id,
            name: raw.name,
            image_url: raw.image_url,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            fields,
        }
    }
}

impl Item {
    /// Value of a shared column or a type-specific field.
    pub fn field(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(Value::from(self.id)),
            "name" => Some(Value::String(self.name.clone())),
            "image_url" => self.image_url.clone().map(Value::String),
            "created_at" => self.created_at.map(|t| Value::String(t.to_rfc3339())),
            "updated_at" => self.updated_at.map(|t| Value::String(t.to_rfc3339())),
            _ => self.fields.get(key).cloned(),
        }
    }

    /// Plain-text form of a field, used for searching. `None` when unset.
    pub fn text_value(&self, key: &str) -> Option<String> {
        self.field(key).as_ref().and_then(value_text)
    }

    /// Text shown in tables and detail pages: `-` for anything unset.
    pub fn display_value(&self, key: &str) -> String {
        match self.field(key) {
            Some(Value::Bool(true)) => "Yes".to_string(),
            Some(Value::Bool(false)) => "No".to_string(),
            other => other
                .as_ref()
                .and_then(value_text)
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(values) => Some(
            values
                .iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coffee() -> Item {
        serde_json::from_value(json!({
            "ID": 12,
            "CreatedAt": "2024-03-01T10:00:00.123-05:00",
            "UpdatedAt": "2024-03-02T10:00:00Z",
            "DeletedAt": null,
            "name": "Kochere",
            "roaster": "Café Saint-Henri",
            "country": "",
            "decaffeinated": false,
            "organic": true,
            "tasting_notes": ["Jasmine", "Bergamot"],
            "altitude": null,
            "Ratings": [],
            "image_url": "https://cdn.example.com/kochere.jpg"
        }))
        .unwrap()
    }

    #[test]
    fn test_gorm_columns_are_normalized() {
        let item = coffee();
        assert_eq!(item.id, 12);
        assert_eq!(item.name, "Kochere");
        assert_eq!(
            item.created_at.unwrap().to_rfc3339(),
            "2024-03-01T15:00:00.123+00:00"
        );
        assert!(item.updated_at.is_some());
        assert!(!item.fields.contains_key("DeletedAt"));
        assert!(!item.fields.contains_key("Ratings"));
        assert!(!item.fields.contains_key("ID"));
        assert_eq!(item.fields["roaster"], json!("Café Saint-Henri"));
    }

    #[test]
    fn test_serialized_form_round_trips() {
        let item = coffee();
        let wire = serde_json::to_value(&item).unwrap();
        assert_eq!(wire["id"], json!(12));
        assert_eq!(wire["roaster"], json!("Café Saint-Henri"));
        let back: Item = serde_json::from_value(wire).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_display_value() {
        let item = coffee();
        assert_eq!(item.display_value("name"), "Kochere");
        assert_eq!(item.display_value("country"), "-");
        assert_eq!(item.display_value("altitude"), "-");
        assert_eq!(item.display_value("region"), "-");
        assert_eq!(item.display_value("decaffeinated"), "No");
        assert_eq!(item.display_value("organic"), "Yes");
        assert_eq!(item.display_value("tasting_notes"), "Jasmine, Bergamot");
        assert_eq!(item.display_value("id"), "12");
    }

    #[test]
    fn test_text_value() {
        let item = coffee();
        assert_eq!(item.text_value("organic").as_deref(), Some("true"));
        assert_eq!(item.text_value("altitude"), None);
        assert_eq!(
            item.text_value("image_url").as_deref(),
            Some("https://cdn.example.com/kochere.jpg")
        );
    }

    #[test]
    fn test_minimal_record() {
        let item: Item = serde_json::from_value(json!({"id": 3})).unwrap();
        assert_eq!(item.name, "");
        assert!(item.image_url.is_none());
        assert!(item.created_at.is_none());
        assert!(item.fields.is_empty());
    }
}
