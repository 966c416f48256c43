//! Response envelopes produced by the REST backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// List endpoints answer either with a bare array or with `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { data } => data,
            ListEnvelope::Bare(items) => items,
        }
    }
}

/// Single-item endpoints follow the same convention as lists.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            ItemEnvelope::Wrapped { data } => data,
            ItemEnvelope::Bare(item) => item,
        }
    }
}

/// Body of an HTTP 422 response.
///
/// ```json
/// { "message": "The given data was invalid.",
///   "errors": { "name": ["The name field is required."] } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    /// Field name to messages, in the order the backend sent them.
    #[serde(default)]
    pub errors: Map<String, Value>,
}

impl ValidationErrorBody {
    /// Flatten the per-field lists into one list of messages.
    ///
    /// Fields are visited in response order; a field may carry a list or a
    /// single string. When no field messages exist the top-level `message`
    /// is used instead.
    pub fn messages(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .errors
            .values()
            .flat_map(|v| match v {
                Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                Value::String(m) => vec![m.as_str()],
                _ => Vec::new(),
            })
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if out.is_empty() {
            if let Some(message) = self.message.as_ref().filter(|m| !m.trim().is_empty()) {
                out.push(message.trim().to_string());
            }
        }
        out
    }
}

/// Generic `{ "message": "..." }` error body returned by non-422 failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_accepts_both_shapes() {
        let bare: ListEnvelope<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(bare.into_vec(), vec![1, 2, 3]);

        let wrapped: ListEnvelope<i32> = serde_json::from_str(r#"{"data":[4,5]}"#).unwrap();
        assert_eq!(wrapped.into_vec(), vec![4, 5]);
    }

    #[test]
    fn test_validation_messages_keep_response_order() {
        let body: ValidationErrorBody = serde_json::from_str(
            r#"{
                "message": "The given data was invalid.",
                "errors": {
                    "name": ["The name field is required."],
                    "email": ["The email must be valid.", "The email has already been taken."]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            body.messages(),
            vec![
                "The name field is required.".to_string(),
                "The email must be valid.".to_string(),
                "The email has already been taken.".to_string(),
            ]
        );
    }

    #[test]
    fn test_validation_accepts_single_string_per_field() {
        let body: ValidationErrorBody = serde_json::from_str(
            r#"{"errors": {"phone": " Phone is too short. ", "age": [], "code": 42}}"#,
        )
        .unwrap();
        assert_eq!(body.messages(), vec!["Phone is too short.".to_string()]);
    }

    #[test]
    fn test_validation_falls_back_to_message() {
        let body: ValidationErrorBody =
            serde_json::from_str(r#"{"message":"Branch is in use"}"#).unwrap();
        assert_eq!(body.messages(), vec!["Branch is in use".to_string()]);

        let empty = ValidationErrorBody::default();
        assert!(empty.messages().is_empty());
    }
}
