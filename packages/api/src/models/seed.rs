//! Bulk-import request and result types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where the backend should read an upload from.
///
/// Serialises to the backend request body: `{"url": "..."}` or `{"data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    Url(String),
    Data(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedResult {
    pub added: u64,
    pub skipped: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub item_count: u64,
    #[serde(default)]
    pub duplicates: u64,
}

impl ValidationResult {
    /// Result used for item types without a validate endpoint.
    pub fn assumed_valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            item_count: 0,
            duplicates: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_source_request_body() {
        assert_eq!(
            serde_json::to_value(SeedSource::Url("https://x.test/c.json".into())).unwrap(),
            json!({"url": "https://x.test/c.json"})
        );
        assert_eq!(
            serde_json::to_value(SeedSource::Data(json!({"cheeses": []}))).unwrap(),
            json!({"data": {"cheeses": []}})
        );
    }

    #[test]
    fn test_validation_result_defaults() {
        let result: ValidationResult =
            serde_json::from_value(json!({"valid": false, "errors": ["Item 1: missing name"]}))
                .unwrap();
        assert!(!result.valid);
        assert_eq!(result.item_count, 0);
        assert_eq!(result.errors, vec!["Item 1: missing name"]);
    }
}
