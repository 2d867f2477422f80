//! Shallow client-side checks.
//!
//! These only catch obvious mistakes before a request is sent (a malformed seed
//! URL, a pasted upload missing required fields). The backend remains the
//! authority on what it accepts.

use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::error::{AdminError, AdminResult};
use crate::registry::{FieldConfig, FieldType, ItemTypeConfig};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },

    #[error("{label} must be at most {max} characters")]
    TooLong { label: &'static str, max: usize },

    #[error("{label} must be at least {min}")]
    BelowMin { label: &'static str, min: f64 },

    #[error("{label} must be at most {max}")]
    AboveMax { label: &'static str, max: f64 },

    #[error("{0} must be text")]
    NotText(&'static str),

    #[error("{0} must be a number")]
    NotANumber(&'static str),

    #[error("{0} must be true or false")]
    NotABoolean(&'static str),

    #[error("{label} must be one of: {allowed}")]
    InvalidOption { label: &'static str, allowed: String },
}

impl FieldConfig {
    /// Check one raw value against this field's type and constraints.
    pub fn check(&self, value: Option<&Value>) -> Result<(), FieldError> {
        let value = match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(v) => Some(v),
        };
        let Some(value) = value else {
            return if self.required {
                Err(FieldError::Required(self.label))
            } else {
                Ok(())
            };
        };

        match self.field_type {
            FieldType::Text | FieldType::Textarea => {
                // Single-line text fields may also hold a list of strings
                let texts: Vec<&str> = match value {
                    Value::String(text) => vec![text.as_str()],
                    Value::Array(values) if self.field_type == FieldType::Text => values
                        .iter()
                        .map(Value::as_str)
                        .collect::<Option<_>>()
                        .ok_or(FieldError::NotText(self.label))?,
                    _ => return Err(FieldError::NotText(self.label)),
                };
                for text in texts {
                    let len = text.chars().count();
                    if let Some(min) = self.min_length.filter(|min| len < *min) {
                        return Err(FieldError::TooShort {
                            label: self.label,
                            min,
                        });
                    }
                    if let Some(max) = self.max_length.filter(|max| len > *max) {
                        return Err(FieldError::TooLong {
                            label: self.label,
                            max,
                        });
                    }
                }
                Ok(())
            }
            FieldType::Number => {
                let number = match value {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse::<f64>().ok(),
                    _ => None,
                }
                .ok_or(FieldError::NotANumber(self.label))?;
                if let Some(min) = self.min.filter(|min| number < *min) {
                    return Err(FieldError::BelowMin {
                        label: self.label,
                        min,
                    });
                }
                if let Some(max) = self.max.filter(|max| number > *max) {
                    return Err(FieldError::AboveMax {
                        label: self.label,
                        max,
                    });
                }
                Ok(())
            }
            FieldType::Select => {
                let known = value
                    .as_str()
                    .is_some_and(|v| self.options.iter().any(|opt| opt.value == v));
                if known {
                    Ok(())
                } else {
                    let allowed = self
                        .options
                        .iter()
                        .map(|opt| opt.value)
                        .collect::<Vec<_>>()
                        .join(", ");
                    Err(FieldError::InvalidOption {
                        label: self.label,
                        allowed,
                    })
                }
            }
            FieldType::Checkbox => match value {
                Value::Bool(_) => Ok(()),
                _ => Err(FieldError::NotABoolean(self.label)),
            },
        }
    }
}

/// A bulk-import source URL must be an absolute http(s) URL.
pub fn validate_seed_url(text: &str) -> AdminResult<Url> {
    Url::parse(text.trim())
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .ok_or_else(|| AdminError::InvalidInput("Please enter a valid URL".to_string()))
}

/// Parse a pasted upload document.
pub fn parse_seed_document(text: &str) -> AdminResult<Value> {
    serde_json::from_str(text).map_err(|e| AdminError::InvalidInput(format!("Invalid JSON: {e}")))
}

/// Pre-flight check of an upload document, one message per problem found.
pub fn validate_seed_document(config: &ItemTypeConfig, document: &Value) -> Vec<String> {
    let key = config.seed_collection_key();
    let Some(object) = document.as_object() else {
        return vec!["Upload must be a JSON object".to_string()];
    };
    let Some(records) = object.get(&key).and_then(Value::as_array) else {
        return vec![format!("Expected an array under \"{key}\"")];
    };
    if records.is_empty() {
        return vec![format!("No {key} found in upload")];
    }

    let mut errors = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let position = index + 1;
        let Some(record) = record.as_object() else {
            errors.push(format!("Item {position}: not an object"));
            continue;
        };
        for field in config.fields {
            if let Err(e) = field.check(record.get(field.key)) {
                errors.push(format!("Item {position}: {e}"));
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::item_type_config;
    use serde_json::json;

    fn wine_field(key: &str) -> &'static FieldConfig {
        item_type_config("wine").unwrap().field(key).unwrap()
    }

    #[test]
    fn test_required_field() {
        let name = wine_field("name");
        assert_eq!(name.check(None), Err(FieldError::Required("Name")));
        assert_eq!(
            name.check(Some(&json!("   "))),
            Err(FieldError::Required("Name"))
        );
        assert!(name.check(Some(&json!("L'Arbouse"))).is_ok());

        // Optional fields accept blanks
        assert!(wine_field("region").check(Some(&Value::Null)).is_ok());
    }

    #[test]
    fn test_text_length_counts_characters() {
        let designation = wine_field("designation");
        let accented = "é".repeat(100);
        assert!(designation.check(Some(&json!(accented))).is_ok());
        assert_eq!(
            designation.check(Some(&json!("x".repeat(101)))),
            Err(FieldError::TooLong {
                label: "Designation",
                max: 100
            })
        );
        assert_eq!(
            designation.check(Some(&json!(42))),
            Err(FieldError::NotText("Designation"))
        );
    }

    #[test]
    fn test_text_list() {
        let notes = item_type_config("coffee").unwrap().field("tasting_notes").unwrap();
        assert!(notes.check(Some(&json!(["Bergamot", "Jasmine"]))).is_ok());
        assert!(notes.check(Some(&json!("Bergamot"))).is_ok());
        assert_eq!(
            notes.check(Some(&json!(["Bergamot", 3]))),
            Err(FieldError::NotText("Tasting Notes"))
        );
        assert!(matches!(
            notes.check(Some(&json!(["x".repeat(101)]))),
            Err(FieldError::TooLong { max: 100, .. })
        ));

        // Long-form fields stay plain strings
        let description = wine_field("description");
        assert_eq!(
            description.check(Some(&json!(["a", "b"]))),
            Err(FieldError::NotText("Description"))
        );
    }

    #[test]
    fn test_number_field() {
        let alcohol = wine_field("alcohol");
        assert!(alcohol.check(Some(&json!(13.5))).is_ok());
        assert!(alcohol.check(Some(&json!("12"))).is_ok());
        assert_eq!(
            alcohol.check(Some(&json!("strong"))),
            Err(FieldError::NotANumber("Alcohol %"))
        );
        assert!(matches!(
            alcohol.check(Some(&json!(140))),
            Err(FieldError::AboveMax { .. })
        ));
    }

    #[test]
    fn test_select_and_checkbox() {
        let color = wine_field("color");
        assert!(color.check(Some(&json!("Rosé"))).is_ok());
        let err = color.check(Some(&json!("Purple"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Color must be one of: Rouge, Blanc, Rosé, Mousseux, Orange"
        );

        let organic = wine_field("organic");
        assert!(organic.check(Some(&json!(true))).is_ok());
        assert_eq!(
            organic.check(Some(&json!("yes"))),
            Err(FieldError::NotABoolean("Organic"))
        );
    }

    #[test]
    fn test_seed_url() {
        assert!(validate_seed_url("https://example.com/cheeses.json").is_ok());
        assert!(validate_seed_url(" http://localhost:9000/data.json ").is_ok());
        for bad in ["", "cheeses.json", "ftp://example.com/a.json", "https://"] {
            let err = validate_seed_url(bad).unwrap_err();
            assert_eq!(err.to_string(), "Please enter a valid URL", "{bad}");
        }
    }

    #[test]
    fn test_seed_document() {
        let config = item_type_config("gin").unwrap();

        let good = json!({"gins": [
            {"name": "Ungava", "producer": "Ungava", "origin": "Quebec", "profile": "Forestier"}
        ]});
        assert!(validate_seed_document(config, &good).is_empty());

        let bad = json!({"gins": [
            {"name": "Ungava", "producer": "Ungava", "origin": "Quebec"},
            "oops"
        ]});
        assert_eq!(
            validate_seed_document(config, &bad),
            vec![
                "Item 1: Profile is required".to_string(),
                "Item 2: not an object".to_string(),
            ]
        );

        assert_eq!(
            validate_seed_document(config, &json!({"wines": []})),
            vec!["Expected an array under \"gins\"".to_string()]
        );
        assert_eq!(
            validate_seed_document(config, &json!({"gins": []})),
            vec!["No gins found in upload".to_string()]
        );
        assert_eq!(
            validate_seed_document(config, &json!([1, 2])),
            vec!["Upload must be a JSON object".to_string()]
        );
    }

    #[test]
    fn test_parse_seed_document() {
        assert!(parse_seed_document(r#"{"gins": []}"#).is_ok());
        let err = parse_seed_document("{gins").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON:"));
    }
}
