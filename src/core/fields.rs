//! Helpers for reading fields out of raw JSON payloads
//!
//! Used by the resource validators, which check shapes field by field so they
//! control every error message.

use serde_json::Value;

/// Non-empty string field; `None` when absent, null, empty, or not a string
pub fn non_empty_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Integer field; `None` when absent, null, or not a JSON integer
pub fn integer(body: &Value, field: &str) -> Option<i64> {
    body.get(field).and_then(Value::as_i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_empty_str_present() {
        let body = json!({"name": "Taco"});
        assert_eq!(non_empty_str(&body, "name"), Some("Taco"));
    }

    #[test]
    fn test_non_empty_str_rejects_empty_null_and_missing() {
        assert_eq!(non_empty_str(&json!({"name": ""}), "name"), None);
        assert_eq!(non_empty_str(&json!({"name": null}), "name"), None);
        assert_eq!(non_empty_str(&json!({}), "name"), None);
        assert_eq!(non_empty_str(&json!(null), "name"), None);
    }

    #[test]
    fn test_non_empty_str_rejects_non_string() {
        assert_eq!(non_empty_str(&json!({"name": 42}), "name"), None);
    }

    #[test]
    fn test_integer_accepts_integers_only() {
        assert_eq!(integer(&json!({"price": 10}), "price"), Some(10));
        assert_eq!(integer(&json!({"price": -5}), "price"), Some(-5));
        assert_eq!(integer(&json!({"price": "10"}), "price"), None);
        assert_eq!(integer(&json!({"price": 2.5}), "price"), None);
        assert_eq!(integer(&json!({}), "price"), None);
    }
}
