use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One value under a metadata key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataValueRest {
    pub value: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub authority: Option<String>,
    pub confidence: i32,
    pub place: i32,
}

/// Metadata grouped by `schema.element[.qualifier]`.
///
/// Keys serialize in lexicographic order. Values under a key keep the order
/// they were added in; duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRest {
    map: BTreeMap<String, Vec<MetadataValueRest>>,
}

impl MetadataRest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under `key`.
    pub fn put(&mut self, key: impl Into<String>, value: MetadataValueRest) {
        self.map.entry(key.into()).or_default().push(value);
    }

    pub fn get(&self, key: &str) -> Option<&[MetadataValueRest]> {
        self.map.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of values across all keys.
    pub fn value_count(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(v: &str, place: i32) -> MetadataValueRest {
        MetadataValueRest {
            value: v.to_string(),
            language: None,
            authority: None,
            confidence: -1,
            place,
        }
    }

    #[test]
    fn put_keeps_duplicates_in_order() {
        let mut metadata = MetadataRest::new();
        metadata.put("dc.contributor.author", value("B", 0));
        metadata.put("dc.contributor.author", value("A", 1));
        metadata.put("dc.contributor.author", value("B", 2));

        let authors: Vec<&str> = metadata
            .get("dc.contributor.author")
            .expect("authors")
            .iter()
            .map(|v| v.value.as_str())
            .collect();
        assert_eq!(authors, vec!["B", "A", "B"]);
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.value_count(), 3);
    }

    #[test]
    fn serializes_as_sorted_object() {
        let mut metadata = MetadataRest::new();
        metadata.put("dc.title", value("T", 0));
        metadata.put("dc.date.issued", value("2020", 0));

        assert_eq!(
            metadata.keys().collect::<Vec<_>>(),
            vec!["dc.date.issued", "dc.title"]
        );

        let json = serde_json::to_value(&metadata).expect("serialize");
        let keys: Vec<&String> = json.as_object().expect("object").keys().collect();
        assert_eq!(keys, vec!["dc.date.issued", "dc.title"]);
        assert_eq!(json["dc.title"][0]["value"], "T");
        assert_eq!(json["dc.title"][0]["language"], serde_json::Value::Null);
    }

    #[test]
    fn empty_metadata_serializes_as_empty_object() {
        let json = serde_json::to_string(&MetadataRest::new()).expect("serialize");
        assert_eq!(json, "{}");
    }
}
