//! Per-section tolerant deserialization.
//!
//! CMS documents are edited by hand and occasionally carry a field of the
//! wrong shape. A malformed section must not take the whole page down, so
//! section fields go through these helpers: anything that fails to decode is
//! logged at debug level and treated as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Decode an optional record, mapping `null` and malformed values to `None`.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(err) => {
            debug!("Dropping malformed {}: {err}", short_type_name::<T>());
            Ok(None)
        }
    }
}

/// Decode a list, skipping malformed elements. Non-arrays decode as empty.
pub(crate) fn sequence<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                debug!("Skipping malformed {}: {err}", short_type_name::<T>());
                None
            }
        })
        .collect())
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Inner {
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct Outer {
        #[serde(default, deserialize_with = "optional")]
        one: Option<Inner>,
        #[serde(default, deserialize_with = "sequence")]
        many: Vec<Inner>,
    }

    #[test]
    fn test_missing_fields_default() {
        let outer: Outer = serde_json::from_str("{}").unwrap();
        assert_eq!(outer.one, None);
        assert!(outer.many.is_empty());
    }

    #[test]
    fn test_malformed_record_becomes_none() {
        let outer: Outer = serde_json::from_str(r#"{"one": {"name": 42}}"#).unwrap();
        assert_eq!(outer.one, None);
    }

    #[test]
    fn test_null_record_becomes_none() {
        let outer: Outer = serde_json::from_str(r#"{"one": null}"#).unwrap();
        assert_eq!(outer.one, None);
    }

    #[test]
    fn test_malformed_elements_skipped_in_order() {
        let outer: Outer = serde_json::from_str(
            r#"{"many": [{"name": "a"}, {"name": 1}, "junk", {"name": "b"}]}"#,
        )
        .unwrap();
        assert_eq!(
            outer.many,
            vec![
                Inner {
                    name: "a".to_owned()
                },
                Inner {
                    name: "b".to_owned()
                }
            ]
        );
    }

    #[test]
    fn test_non_array_sequence_is_empty() {
        let outer: Outer = serde_json::from_str(r#"{"many": {"name": "a"}}"#).unwrap();
        assert!(outer.many.is_empty());
    }
}
