//! Serde helpers for partial updates.
//!
//! A partial-update payload has to tell three cases apart for nullable
//! fields: the field is absent (leave unchanged), the field is `null`
//! (clear it), or the field carries a value (replace it). Combine
//! `#[serde(default, deserialize_with = "shared::nullable::deserialize")]`
//! with an `Option<Option<T>>` field to get exactly that.

use serde::{Deserialize, Deserializer};

/// Deserializes a present field into `Some(inner)`, where `inner` is `None`
/// for an explicit `null`. Absent fields fall back to `Default` (`None`).
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "super::deserialize")]
        note: Option<Option<String>>,
    }

    #[test]
    fn test_absent_field_is_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.note, None);
    }

    #[test]
    fn test_null_field_is_some_none() {
        let patch: Patch = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(patch.note, Some(None));
    }

    #[test]
    fn test_value_field_is_some_some() {
        let patch: Patch = serde_json::from_str(r#"{"note": "wrap it"}"#).unwrap();
        assert_eq!(patch.note, Some(Some("wrap it".to_string())));
    }

    #[test]
    fn test_wrong_type_is_error() {
        let result: Result<Patch, _> = serde_json::from_str(r#"{"note": 5}"#);
        assert!(result.is_err());
    }
}
