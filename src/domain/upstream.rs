//! Upstream document shapes
//!
//! The archive answers with loosely typed JSON: multi-valued fields arrive as
//! arrays, sizes as strings, whole sections may be missing. Everything here is
//! parsed leniently once at the boundary; a field of the wrong type becomes
//! `None` instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single file entry of an item's metadata document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoteFileDescriptor {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub format: Option<String>,
    /// Bytes, truncated to a whole number when the archive reports a fraction
    #[serde(default, deserialize_with = "count")]
    pub size: Option<u64>,
}

/// Bibliographic fields shared by metadata documents and search rows
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemFields {
    #[serde(default, deserialize_with = "scalar_text")]
    pub identifier: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub licenseurl: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub rights: Option<String>,
    #[serde(default, deserialize_with = "count")]
    pub downloads: Option<u64>,
}

/// Body of `GET /metadata/{identifier}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetadataDocument {
    #[serde(default, deserialize_with = "lenient_list")]
    pub files: Vec<RemoteFileDescriptor>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub metadata: ItemFields,
}

/// Body of `GET /advancedsearch.php?output=json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "lenient_object")]
    pub response: SearchResults,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResults {
    #[serde(rename = "numFound", default, deserialize_with = "count")]
    pub num_found: Option<u64>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub docs: Vec<ItemFields>,
}

/// Render a JSON value as display text.
///
/// Strings pass through, numbers keep their JSON spelling and arrays of those
/// are joined with `", "`. Empty results are `None`.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_to_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        other => scalar_to_text(other),
    }
}

fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce a JSON number or numeric string to a non-negative integer
pub fn value_to_count(value: &Value) -> Option<u64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };

    if number.is_finite() && number >= 0.0 {
        Some(number.trunc() as u64)
    } else {
        None
    }
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_text))
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_text))
}

fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_count))
}

// Non-array values become an empty list. Only object elements are kept: serde
// would otherwise fill a struct from an array by field position.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(object @ Value::Object(_)) => serde_json::from_value(object).unwrap_or_default(),
        _ => T::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_descriptor_coerces_loose_types() {
        let file: RemoteFileDescriptor = serde_json::from_value(json!({
            "name": "flatland.pdf",
            "format": "Text PDF",
            "size": "48213"
        }))
        .unwrap();
        assert_eq!(file.name.as_deref(), Some("flatland.pdf"));
        assert_eq!(file.size, Some(48213));

        let odd: RemoteFileDescriptor = serde_json::from_value(json!({
            "name": 42,
            "format": ["x"],
            "size": "n/a"
        }))
        .unwrap();
        assert_eq!(odd.name.as_deref(), Some("42"));
        assert_eq!(odd.format, None);
        assert_eq!(odd.size, None);
    }

    #[test]
    fn test_metadata_document_tolerates_missing_and_wrong_sections() {
        let empty: MetadataDocument = serde_json::from_value(json!({})).unwrap();
        assert!(empty.files.is_empty());
        assert_eq!(empty.metadata, ItemFields::default());

        let wrong: MetadataDocument = serde_json::from_value(json!({
            "files": "nope",
            "metadata": [1, 2, 3]
        }))
        .unwrap();
        assert!(wrong.files.is_empty());
        assert_eq!(wrong.metadata.title, None);
    }

    #[test]
    fn test_non_object_files_are_skipped() {
        let doc: MetadataDocument = serde_json::from_value(json!({
            "files": [{ "name": "a.pdf" }, "garbage", null, { "name": "b.epub" }]
        }))
        .unwrap();
        let names: Vec<_> = doc.files.iter().filter_map(|f| f.name.as_deref()).collect();
        assert_eq!(names, vec!["a.pdf", "b.epub"]);
    }

    #[test]
    fn test_array_shaped_rows_and_files_are_dropped() {
        let search: SearchResponse = serde_json::from_value(json!({
            "response": {
                "docs": [["evil-id", "Injected Title"], { "identifier": "real" }]
            }
        }))
        .unwrap();
        let ids: Vec<_> = search
            .response
            .docs
            .iter()
            .filter_map(|d| d.identifier.as_deref())
            .collect();
        assert_eq!(ids, vec!["real"]);

        let doc: MetadataDocument = serde_json::from_value(json!({
            "files": [["x.pdf", "PDF", 5]],
            "metadata": ["Title", "Creator"]
        }))
        .unwrap();
        assert!(doc.files.is_empty());
        assert_eq!(doc.metadata, ItemFields::default());

        let response: SearchResponse =
            serde_json::from_value(json!({ "response": [12, [["a"]]] })).unwrap();
        assert_eq!(response.response, SearchResults::default());
    }

    #[test]
    fn test_fractional_size_truncates() {
        let file: RemoteFileDescriptor =
            serde_json::from_value(json!({ "name": "a.pdf", "size": "1.5" })).unwrap();
        assert_eq!(file.size, Some(1));
    }

    #[test]
    fn test_multi_valued_fields_are_joined() {
        let fields: ItemFields = serde_json::from_value(json!({
            "creator": ["Ibn Kathir", "Al-Tabari"],
            "language": ["ara", "eng"],
            "date": 1999,
            "downloads": 1234.0
        }))
        .unwrap();
        assert_eq!(fields.creator.as_deref(), Some("Ibn Kathir, Al-Tabari"));
        assert_eq!(fields.language.as_deref(), Some("ara, eng"));
        assert_eq!(fields.date.as_deref(), Some("1999"));
        assert_eq!(fields.downloads, Some(1234));
    }

    #[test]
    fn test_search_response_num_found() {
        let parsed: SearchResponse = serde_json::from_value(json!({
            "responseHeader": { "status": 0 },
            "response": { "numFound": 321, "start": 0, "docs": [{ "identifier": "abc123" }] }
        }))
        .unwrap();
        assert_eq!(parsed.response.num_found, Some(321));
        assert_eq!(parsed.response.docs.len(), 1);
    }

    #[test]
    fn test_value_to_count_rejects_negative_and_empty() {
        assert_eq!(value_to_count(&json!(-5)), None);
        assert_eq!(value_to_count(&json!("")), None);
        assert_eq!(value_to_count(&json!(" 17 ")), Some(17));
        assert_eq!(value_to_count(&json!(true)), None);
    }
}
