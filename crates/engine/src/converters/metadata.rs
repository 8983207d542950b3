//! Metadata flattening.

use libris_domain::MetadataValue;
use libris_shared::{MetadataRest, MetadataValueRest};

/// Reshapes a flat list of metadata values into key-grouped form.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataConverter;

impl MetadataConverter {
    pub fn new() -> Self {
        Self
    }

    /// Groups `values` by `schema.element[.qualifier]`.
    ///
    /// Every input value appears exactly once in the output, under its key,
    /// in input order.
    pub fn convert(&self, values: &[MetadataValue]) -> MetadataRest {
        let mut metadata = MetadataRest::new();
        for value in values {
            metadata.put(value.field.key(), Self::value(value));
        }
        metadata
    }

    fn value(value: &MetadataValue) -> MetadataValueRest {
        MetadataValueRest {
            value: value.value.clone(),
            language: value.language.clone(),
            authority: value.authority.clone(),
            confidence: value.confidence,
            place: value.place,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::value;

    fn values_of<'a>(metadata: &'a MetadataRest, key: &str) -> Vec<&'a str> {
        metadata
            .get(key)
            .unwrap_or_default()
            .iter()
            .map(|v| v.value.as_str())
            .collect()
    }

    #[test]
    fn repeated_keys_keep_every_value_in_order() {
        let input = vec![
            value("dc.contributor.author", "A"),
            value("dc.title", "Title"),
            value("dc.contributor.author", "B"),
            value("dc.contributor.author", "A"),
        ];

        let metadata = MetadataConverter::new().convert(&input);

        assert_eq!(values_of(&metadata, "dc.contributor.author"), vec!["A", "B", "A"]);
        assert_eq!(values_of(&metadata, "dc.title"), vec!["Title"]);
        assert_eq!(metadata.value_count(), input.len());
    }

    #[test]
    fn qualifier_separates_keys() {
        let input = vec![
            value("dc.title", "Main"),
            value("dc.title.alternative", "Other"),
        ];

        let metadata = MetadataConverter::new().convert(&input);

        assert_eq!(metadata.len(), 2);
        assert_eq!(values_of(&metadata, "dc.title.alternative"), vec!["Other"]);
    }

    #[test]
    fn language_authority_and_place_are_carried() {
        let input = vec![value("dc.subject", "Ozean")
            .with_language("de")
            .with_authority("lcsh:sh85094864", 500)
            .with_place(4)];

        let metadata = MetadataConverter::new().convert(&input);
        let subject = &metadata.get("dc.subject").expect("subject")[0];

        assert_eq!(subject.language.as_deref(), Some("de"));
        assert_eq!(subject.authority.as_deref(), Some("lcsh:sh85094864"));
        assert_eq!(subject.confidence, 500);
        assert_eq!(subject.place, 4);
    }

    #[test]
    fn empty_input_yields_empty_metadata() {
        assert!(MetadataConverter::new().convert(&[]).is_empty());
    }
}
