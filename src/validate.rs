//! Paging request validation
//!
//! All structural checks happen here, before any slicing. Checks run in a
//! fixed priority order: missing cursor keys on the data first, then
//! cursor ambiguity, then cursor resolution, then size. Validation has no
//! side effects; success returns the request untouched.

use crate::error::{Error, Result};
use crate::types::PageRequest;
use crate::window::locate;

/// Validate a paging request against a dataset
///
/// `key` is the configured cursor key name, used both in the missing-key
/// error message and (through `key_of`) for cursor resolution.
pub fn check<T, F>(data: &[T], request: &PageRequest, key: &str, key_of: &F) -> Result<()>
where
    F: Fn(&T) -> Option<String>,
{
    if data.iter().any(|record| key_of(record).is_none()) {
        return Err(Error::missing_key(key));
    }

    if request.is_ambiguous() {
        return Err(Error::AmbiguousCursorDirection);
    }

    // Strict policy: an unresolved cursor is an error, never "start of data".
    if let Some(cursor) = request.cursor() {
        if locate(data, cursor, key_of).is_none() {
            return Err(Error::cursor_not_found(cursor));
        }
    }

    if let Some(size) = request.size {
        if size <= 0 {
            return Err(Error::invalid_size(size));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CursorKeyed;
    use crate::types::JsonValue;
    use serde_json::json;
    use test_case::test_case;

    fn dataset(n: usize) -> Vec<JsonValue> {
        (1..=n).map(|i| json!({"id": i.to_string()})).collect()
    }

    fn key_of(record: &JsonValue) -> Option<String> {
        record.cursor_value("id")
    }

    #[test]
    fn test_valid_requests_pass() {
        let data = dataset(10);
        check(&data, &PageRequest::new(), "id", &key_of).unwrap();
        check(&data, &PageRequest::forward("5").with_size(3), "id", &key_of).unwrap();
        check(&data, &PageRequest::backward("5"), "id", &key_of).unwrap();
    }

    #[test]
    fn test_missing_key_names_configured_key() {
        let mut data = dataset(10);
        data[5] = json!({"name": "some name"});

        let err = check(&data, &PageRequest::new(), "id", &key_of).unwrap_err();
        assert_eq!(err, Error::missing_key("id"));
    }

    #[test]
    fn test_missing_key_checked_before_ambiguity() {
        let data = vec![json!({"name": "no id"})];
        let request = PageRequest {
            after: Some("1".into()),
            before: Some("1".into()),
            size: Some(-1),
        };

        let err = check(&data, &request, "id", &key_of).unwrap_err();
        assert_eq!(err, Error::missing_key("id"));
    }

    #[test]
    fn test_ambiguous_cursors_rejected() {
        let data = dataset(10);
        let request = PageRequest {
            after: Some("5".into()),
            before: Some("5".into()),
            size: None,
        };

        let err = check(&data, &request, "id", &key_of).unwrap_err();
        assert_eq!(err, Error::AmbiguousCursorDirection);
    }

    #[test]
    fn test_unknown_cursor_rejected() {
        let data = dataset(10);
        let request = PageRequest::forward("invalid_id").with_size(3);

        let err = check(&data, &request, "id", &key_of).unwrap_err();
        assert_eq!(err, Error::cursor_not_found("invalid_id"));
    }

    #[test]
    fn test_empty_cursor_skips_resolution() {
        let data = dataset(10);
        check(&data, &PageRequest::forward(""), "id", &key_of).unwrap();
    }

    #[test_case(0; "zero")]
    #[test_case(-2; "negative")]
    #[test_case(i64::MIN; "very negative")]
    fn test_invalid_sizes_rejected(size: i64) {
        let data = dataset(10);
        let err = check(&data, &PageRequest::sized(size), "id", &key_of).unwrap_err();
        assert_eq!(err, Error::invalid_size(size));
    }

    #[test]
    fn test_cursor_resolution_checked_before_size() {
        let data = dataset(10);
        let request = PageRequest::forward("missing").with_size(-2);

        let err = check(&data, &request, "id", &key_of).unwrap_err();
        assert_eq!(err, Error::cursor_not_found("missing"));
    }
}
