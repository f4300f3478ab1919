use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Request body for POST /kv
///
/// `value` carries JSON encoded as a string, e.g. `"{\"a\": 1}"`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRequest {
    pub key: String,
    pub value: String,
}

/// Request body for PUT /kv/{key}
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateRequest {
    pub value: String,
}

impl CreateRequest {
    /// Reject empty keys and values that are not themselves JSON
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.key.is_empty() {
            return Err(ApiError::InvalidBody("key must not be empty".to_string()));
        }
        ensure_json_text(&self.value)
    }
}

impl UpdateRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        ensure_json_text(&self.value)
    }
}

/// Check that `value` decodes as a JSON document without keeping the parse
///
/// Nesting deeper than serde_json's recursion limit (128) is rejected.
fn ensure_json_text(value: &str) -> Result<(), ApiError> {
    serde_json::from_str::<IgnoredAny>(value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_create(body: &str) -> serde_json::Result<CreateRequest> {
        serde_json::from_str(body)
    }

    #[test]
    fn test_create_request_accepts_encoded_values() {
        for body in [
            r#"{"key": "one", "value": "\"1\""}"#,
            r#"{"key": "zero", "value": "0"}"#,
            r#"{"key": "list", "value": "[\"a\", \"b\"]"}"#,
            r#"{"key": "equation", "value": "{\"12+34\": 46}"}"#,
            r#"{"key": "nothing", "value": "null"}"#,
        ] {
            let request = parse_create(body).unwrap();
            assert!(request.validate().is_ok(), "rejected {}", body);
        }
    }

    #[test]
    fn test_create_request_rejects_bad_shapes() {
        // numeric key, misspelled key, misspelled value, null value
        for body in [
            r#"{"key": 3, "value": "0"}"#,
            r#"{"keys": "4", "value": "[\"a\", \"b\"]"}"#,
            r#"{"key": "5", "val": "[]"}"#,
            r#"{"key": "7", "value": null}"#,
            r#"{"key": "8", "value": "1", "extra": true}"#,
        ] {
            assert!(parse_create(body).is_err(), "accepted {}", body);
        }
    }

    #[test]
    fn test_create_request_rejects_bare_token() {
        let request = parse_create(r#"{"key": "6", "value": "s"}"#).unwrap();

        let err = request.validate().unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody(msg) if msg.contains("not valid JSON")));
    }

    #[test]
    fn test_create_request_rejects_empty_key() {
        let request = parse_create(r#"{"key": "", "value": "1"}"#).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_value_nesting_limit() {
        let nested = |depth: usize| UpdateRequest {
            value: format!("{}{}", "[".repeat(depth), "]".repeat(depth)),
        };

        assert!(nested(100).validate().is_ok());
        assert!(matches!(nested(200).validate(), Err(ApiError::InvalidBody(_))));
    }

    #[test]
    fn test_update_request_shapes() {
        let ok: UpdateRequest = serde_json::from_str(r#"{"value": "{\"a\": \"b\"}"}"#).unwrap();
        assert!(ok.validate().is_ok());

        assert!(serde_json::from_str::<UpdateRequest>(r#"{"value": 1}"#).is_err());
        assert!(serde_json::from_str::<UpdateRequest>(r#"{}"#).is_err());

        let trailing: UpdateRequest = serde_json::from_str(r#"{"value": "1 2"}"#).unwrap();
        assert!(trailing.validate().is_err());
    }
}
