//! Document filters
//!
//! Filters match documents strictly: exact equality with no type coercion,
//! and case-insensitive regex matching against string fields. A missing
//! field or a null value never matches.

use regex::{Regex, RegexBuilder};
use serde_json::Value;

use super::errors::{StoreError, StoreResult};

/// A filter over documents in a collection
#[derive(Debug, Clone)]
pub enum Filter {
    /// Matches every document
    All,
    /// Exact equality on one field (no coercion)
    Eq { field: String, value: Value },
    /// Case-insensitive regex match on one string field
    Matches { field: String, regex: Regex },
}

impl Filter {
    /// Exact-equality filter on a field
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::Eq {
            field: field.into(),
            value,
        }
    }

    /// Case-insensitive pattern filter on a field.
    ///
    /// The pattern is compiled as a regex, so a plain substring matches
    /// anywhere in the field value.
    pub fn matches(field: impl Into<String>, pattern: &str) -> StoreResult<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| StoreError::invalid_pattern(e.to_string()))?;
        Ok(Self::Matches {
            field: field.into(),
            regex,
        })
    }

    /// Checks whether a document matches this filter
    pub fn is_match(&self, document: &Value) -> bool {
        match self {
            Self::All => true,
            Self::Eq { field, value } => match document.get(field) {
                Some(actual) if !actual.is_null() => actual == value,
                _ => false,
            },
            Self::Matches { field, regex } => match document.get(field) {
                Some(Value::String(s)) => regex.is_match(s),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eq_exact_match() {
        let doc = json!({"name": "Widget", "quantity": 10});

        assert!(Filter::eq("name", json!("Widget")).is_match(&doc));
        assert!(!Filter::eq("name", json!("Gadget")).is_match(&doc));
    }

    #[test]
    fn test_eq_no_type_coercion() {
        let doc = json!({"quantity": 10});

        // String "10" must not match integer 10.
        assert!(!Filter::eq("quantity", json!("10")).is_match(&doc));
        assert!(Filter::eq("quantity", json!(10)).is_match(&doc));
    }

    #[test]
    fn test_missing_field_no_match() {
        let doc = json!({"name": "Widget"});
        assert!(!Filter::eq("price", json!(1.0)).is_match(&doc));
    }

    #[test]
    fn test_null_value_no_match() {
        let doc = json!({"name": null});
        assert!(!Filter::eq("name", json!("Widget")).is_match(&doc));
    }

    #[test]
    fn test_pattern_case_insensitive_substring() {
        let doc = json!({"name": "Widget"});

        assert!(Filter::matches("name", "wid").unwrap().is_match(&doc));
        assert!(Filter::matches("name", "GET").unwrap().is_match(&doc));
        assert!(!Filter::matches("name", "zzz").unwrap().is_match(&doc));
    }

    #[test]
    fn test_pattern_on_non_string_field_no_match() {
        let doc = json!({"quantity": 10});
        assert!(!Filter::matches("quantity", "1").unwrap().is_match(&doc));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = Filter::matches("name", "[").unwrap_err();
        assert_eq!(err.code(), "STOCK_STORE_INVALID_PATTERN");
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(Filter::All.is_match(&json!({})));
        assert!(Filter::All.is_match(&json!({"name": "x"})));
    }
}
