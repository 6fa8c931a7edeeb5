//! Record cursor-key access
//!
//! The engine never inspects a record beyond its cursor key. Any record
//! type that can yield a cursor value for a key name works, either through
//! the [`CursorKeyed`] trait or through a caller-supplied closure
//! (`Pager::paginate_with`).

use crate::types::JsonValue;

/// A record that can yield a cursor value for a named key
///
/// Returning `None` means the record has no usable value under that key,
/// which the validator reports as a missing cursor key. Cursor values must
/// be unique across one dataset; that is a caller precondition.
pub trait CursorKeyed {
    /// The record's cursor value under `key`, if present
    fn cursor_value(&self, key: &str) -> Option<String>;
}

impl CursorKeyed for JsonValue {
    fn cursor_value(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            JsonValue::Bool(b) => Some(b.to_string()),
            JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }
}

impl<T: CursorKeyed> CursorKeyed for &T {
    fn cursor_value(&self, key: &str) -> Option<String> {
        (*self).cursor_value(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_string_key() {
        let record = json!({"id": "15", "name": "some name"});
        assert_eq!(record.cursor_value("id"), Some("15".to_string()));
    }

    #[test]
    fn test_json_number_key_stringified() {
        let record = json!({"id": 42});
        assert_eq!(record.cursor_value("id"), Some("42".to_string()));
    }

    #[test]
    fn test_json_missing_or_null_key() {
        let record = json!({"name": "no id here"});
        assert_eq!(record.cursor_value("id"), None);

        let record = json!({"id": null});
        assert_eq!(record.cursor_value("id"), None);
    }

    #[test]
    fn test_json_custom_key() {
        let record = json!({"__cursor": "7", "id": "ignored"});
        assert_eq!(record.cursor_value("__cursor"), Some("7".to_string()));
    }

    #[test]
    fn test_non_object_has_no_key() {
        assert_eq!(json!("plain string").cursor_value("id"), None);
        assert_eq!(json!([1, 2, 3]).cursor_value("id"), None);
    }
}
