//! Forgiving deserializers for hand-edited résumé documents.
//!
//! A missing or malformed optional field must never fail a load: categories
//! that are not arrays load as empty, scalar text is coerced to a string, and
//! `null` behaves like an absent field.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// A sequence of records; any non-array value loads as empty and members
/// that are not objects are skipped.
pub(crate) fn sequence<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(_) => Some(
                serde_json::from_value(item)
                    .map_err(|e| D::Error::custom(format!("entry {}: {}", index, e))),
            ),
            other => {
                log::warn!("Skipping entry {}: expected an object, found {}", index, other);
                None
            }
        })
        .collect()
}

/// A nested object; any non-object value loads as the default.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => Ok(T::default()),
    }
}

/// A list of strings; non-array values load as empty and non-string members
/// are skipped.
pub(crate) fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Free text. Numbers and booleans are kept as their literal form.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Optional free text. Blank strings count as absent.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).filter(|s| !s.trim().is_empty()))
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "super::strings")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "super::text")]
        phone: String,
        #[serde(default, deserialize_with = "super::optional_text")]
        end: Option<String>,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Entry {
        #[serde(default)]
        name: String,
        #[serde(default)]
        rank: u32,
    }

    #[derive(Deserialize)]
    struct Entries {
        #[serde(default, deserialize_with = "super::sequence")]
        entries: Vec<Entry>,
    }

    fn fields(json: &str) -> Fields {
        serde_json::from_str(json).unwrap()
    }

    fn entries(json: &str) -> serde_json::Result<Vec<Entry>> {
        serde_json::from_str::<Entries>(json).map(|e| e.entries)
    }

    #[test]
    fn test_sequence_skips_non_objects() {
        let loaded = entries(r#"{"entries": ["draft", null, {"name": "Acme"}, 3, []]}"#).unwrap();
        assert_eq!(
            loaded,
            vec![Entry {
                name: "Acme".to_string(),
                rank: 0
            }]
        );
    }

    #[test]
    fn test_sequence_non_array_is_empty() {
        assert!(entries(r#"{"entries": {"name": "Acme"}}"#).unwrap().is_empty());
        assert!(entries(r#"{"entries": "none"}"#).unwrap().is_empty());
    }

    #[test]
    fn test_sequence_error_names_entry_index() {
        let err = entries(r#"{"entries": [{"name": "Acme"}, {"rank": "first"}]}"#).unwrap_err();
        assert!(err.to_string().contains("entry 1:"));
    }

    #[test]
    fn test_strings_skip_non_strings() {
        let p = fields(r#"{"tags": ["pdf", 3, null, "website"]}"#);
        assert_eq!(p.tags, vec!["pdf", "website"]);
    }

    #[test]
    fn test_strings_non_array_is_empty() {
        assert!(fields(r#"{"tags": "pdf"}"#).tags.is_empty());
        assert!(fields(r#"{"tags": null}"#).tags.is_empty());
        assert!(fields("{}").tags.is_empty());
    }

    #[test]
    fn test_text_coerces_numbers() {
        assert_eq!(fields(r#"{"phone": 5550100}"#).phone, "5550100");
        assert_eq!(fields(r#"{"phone": null}"#).phone, "");
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(fields(r#"{"end": ""}"#).end, None);
        assert_eq!(fields(r#"{"end": "2021-06"}"#).end.as_deref(), Some("2021-06"));
    }
}
