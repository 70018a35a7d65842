//! Tri-state fields for partial updates
//!
//! With `#[serde(default, deserialize_with = "nullable")]` on an
//! `Option<Option<T>>` field, an absent key stays `None` (keep the stored
//! value), `null` becomes `Some(None)` (clear it) and a value becomes
//! `Some(Some(v))`.

use serde::{Deserialize, Deserializer};

pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        phone: Option<Option<String>>,
    }

    fn parse(json: &str) -> Option<Option<String>> {
        serde_json::from_str::<Patch>(json).unwrap().phone
    }

    #[test]
    fn absent_null_and_value_are_distinct() {
        assert_eq!(parse("{}"), None);
        assert_eq!(parse(r#"{"phone": null}"#), Some(None));
        assert_eq!(parse(r#"{"phone": "555"}"#), Some(Some("555".into())));
    }
}
