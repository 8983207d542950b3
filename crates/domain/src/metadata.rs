//! Descriptive metadata model.
//!
//! An item holds a multiset of `(schema, element, qualifier, language, value)`
//! tuples. Keys repeat freely (several `dc.contributor.author` values are
//! normal) and the order of values under one key is meaningful.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Confidence for a value with no authority control applied.
pub const CONFIDENCE_UNSET: i32 = -1;
/// Confidence for an authority value accepted by a curator or a trusted source.
pub const CONFIDENCE_ACCEPTED: i32 = 600;

/// A metadata field in the registry, e.g. `dc.contributor.author`.
///
/// Deserialization runs the same checks as [`MetadataField::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawMetadataField")]
pub struct MetadataField {
    pub schema: String,
    pub element: String,
    #[serde(default)]
    pub qualifier: Option<String>,
}

impl MetadataField {
    pub fn new(
        schema: impl Into<String>,
        element: impl Into<String>,
        qualifier: Option<&str>,
    ) -> Result<Self, DomainError> {
        let schema = schema.into();
        let element = element.into();
        if schema.trim().is_empty() {
            return Err(DomainError::validation("Metadata schema cannot be empty"));
        }
        if element.trim().is_empty() {
            return Err(DomainError::validation("Metadata element cannot be empty"));
        }
        let qualifier = match qualifier {
            Some(q) if q.trim().is_empty() => {
                return Err(DomainError::validation(
                    "Metadata qualifier cannot be blank; omit it instead",
                ))
            }
            other => other.map(str::to_string),
        };
        // Components are joined with '.' to form the grouping key.
        let dotted = [Some(schema.as_str()), Some(element.as_str()), qualifier.as_deref()]
            .into_iter()
            .flatten()
            .any(|part| part.contains('.'));
        if dotted {
            return Err(DomainError::validation(format!(
                "Metadata field components cannot contain '.': {schema}, {element}, {qualifier:?}"
            )));
        }
        Ok(Self {
            schema,
            element,
            qualifier,
        })
    }

    /// Grouping key: `schema.element` or `schema.element.qualifier`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

#[derive(Deserialize)]
struct RawMetadataField {
    schema: String,
    element: String,
    #[serde(default)]
    qualifier: Option<String>,
}

impl TryFrom<RawMetadataField> for MetadataField {
    type Error = DomainError;

    fn try_from(raw: RawMetadataField) -> Result<Self, Self::Error> {
        Self::new(raw.schema, raw.element, raw.qualifier.as_deref())
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{}.{}.{}", self.schema, self.element, qualifier),
            None => write!(f, "{}.{}", self.schema, self.element),
        }
    }
}

impl FromStr for MetadataField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [schema, element] => Self::new(*schema, *element, None),
            [schema, element, qualifier] => Self::new(*schema, *element, Some(qualifier)),
            _ => Err(DomainError::parse(format!(
                "expected schema.element[.qualifier], got '{s}'"
            ))),
        }
    }
}

/// One metadata value attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataValue {
    pub field: MetadataField,
    pub value: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub authority: Option<String>,
    #[serde(default = "default_confidence")]
    pub confidence: i32,
    /// Position among the item's values for the same field.
    #[serde(default)]
    pub place: i32,
}

fn default_confidence() -> i32 {
    CONFIDENCE_UNSET
}

impl MetadataValue {
    pub fn new(field: MetadataField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            language: None,
            authority: None,
            confidence: CONFIDENCE_UNSET,
            place: 0,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_authority(mut self, authority: impl Into<String>, confidence: i32) -> Self {
        self.authority = Some(authority.into());
        self.confidence = confidence;
        self
    }

    pub fn with_place(mut self, place: i32) -> Self {
        self.place = place;
        self
    }
}

/// Restriction on one axis of a metadata query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Wildcard: every value matches.
    #[default]
    Any,
    /// Matches only values where the axis is absent (no qualifier, no language).
    Unset,
    /// Matches values whose axis equals this string.
    Is(String),
}

impl Selector {
    pub fn is(value: impl Into<String>) -> Self {
        Self::Is(value.into())
    }

    pub fn matches(&self, candidate: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Unset => candidate.is_none(),
            Self::Is(expected) => candidate == Some(expected.as_str()),
        }
    }
}

/// Metadata lookup over the four key axes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataQuery {
    pub schema: Selector,
    pub element: Selector,
    pub qualifier: Selector,
    pub language: Selector,
}

impl MetadataQuery {
    /// Wildcard on all four axes: the item's complete value set.
    pub fn any() -> Self {
        Self::default()
    }

    /// Exact field match, any language.
    pub fn field(field: &MetadataField) -> Self {
        Self {
            schema: Selector::is(&field.schema),
            element: Selector::is(&field.element),
            qualifier: match &field.qualifier {
                Some(q) => Selector::is(q),
                None => Selector::Unset,
            },
            language: Selector::Any,
        }
    }

    pub fn with_language(mut self, language: Selector) -> Self {
        self.language = language;
        self
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Self::any()
    }

    pub fn matches(&self, value: &MetadataValue) -> bool {
        self.schema.matches(Some(&value.field.schema))
            && self.element.matches(Some(&value.field.element))
            && self.qualifier.matches(value.field.qualifier.as_deref())
            && self.language.matches(value.language.as_deref())
    }
}
