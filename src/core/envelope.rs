//! The `{"data": ...}` envelope wrapping every request and response body

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope carrying an entity or a collection
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

/// Request envelope
///
/// `data` is kept as raw JSON so the validators own every field check and
/// error message; a missing `data` key becomes `null` and fails the first
/// required-field check rather than a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_data_key_defaults_to_null() {
        let body: RequestBody = serde_json::from_value(json!({})).unwrap();
        assert!(body.data.is_null());
    }

    #[test]
    fn test_data_key_passes_through() {
        let body: RequestBody = serde_json::from_value(json!({"data": {"name": "x"}})).unwrap();
        assert_eq!(body.data["name"], "x");
    }

    #[test]
    fn test_data_body_serializes_under_data_key() {
        let body = DataBody { data: vec![1, 2, 3] };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({"data": [1, 2, 3]}));
    }
}
