use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional structured error body returned with 4xx/5xx responses.
///
/// `errors` is either a list of messages or a mapping of field name to a
/// message or list of messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl ErrorBody {
    /// First entry of `errors`, in server order.
    pub fn first_error(&self) -> Option<&str> {
        let first = match self.errors.as_ref()? {
            Value::Array(items) => items.first()?,
            Value::Object(fields) => fields.values().next()?,
            Value::String(text) => return Some(text.as_str()),
            _ => return None,
        };

        match first {
            Value::String(text) => Some(text.as_str()),
            Value::Array(items) => items.first().and_then(Value::as_str),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_from_field_mapping() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"errors":{"email":["Enter a valid email."],"password":["Too short."]}}"#,
        )
        .unwrap();

        assert_eq!(body.first_error(), Some("Enter a valid email."));
    }

    #[test]
    fn test_first_error_from_list() {
        let body: ErrorBody = serde_json::from_str(r#"{"errors":["Slot taken"]}"#).unwrap();
        assert_eq!(body.first_error(), Some("Slot taken"));
    }

    #[test]
    fn test_first_error_from_plain_string_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"errors":{"date":"In the past"}}"#).unwrap();
        assert_eq!(body.first_error(), Some("In the past"));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body, ErrorBody::default());
        assert_eq!(body.first_error(), None);
    }
}
