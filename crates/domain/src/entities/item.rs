//! Item entity - The repository's core content unit
//!
//! An item is archived into one owning collection and may additionally act as
//! the template for new submissions to a collection. Its bundles, bitstreams
//! and metadata values are stored separately and loaded on demand through the
//! persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Collection, ObjectType, RepositoryObject};
use crate::ItemId;

/// A digital-library content record.
///
/// Plain data struct: every combination of flags is a state the repository
/// can hold (a withdrawn item is typically not in the archive, but nothing
/// here enforces it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Persistent identifier, e.g. `123456789/42`. Absent until archived.
    #[serde(default)]
    pub handle: Option<String>,
    /// Display name (the primary title).
    #[serde(default)]
    pub name: Option<String>,
    pub in_archive: bool,
    pub discoverable: bool,
    pub withdrawn: bool,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub owning_collection: Option<Collection>,
    /// Set when this item is the submission template of a collection.
    #[serde(default)]
    pub template_item_of: Option<Collection>,
}

impl Item {
    /// Creates an unarchived, discoverable item with no collection links.
    pub fn new(last_modified: DateTime<Utc>) -> Self {
        Self {
            id: ItemId::new(),
            handle: None,
            name: None,
            in_archive: false,
            discoverable: true,
            withdrawn: false,
            last_modified,
            owning_collection: None,
            template_item_of: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Archives the item into its owning collection.
    pub fn archived_in(mut self, collection: Collection) -> Self {
        self.in_archive = true;
        self.owning_collection = Some(collection);
        self
    }

    pub fn with_template_of(mut self, collection: Collection) -> Self {
        self.template_item_of = Some(collection);
        self
    }
}

impl RepositoryObject for Item {
    fn uuid(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::Item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archived_in_sets_flag_and_collection() {
        let collection = Collection::new("Theses");
        let item = Item::new(Utc::now()).archived_in(collection.clone());

        assert!(item.in_archive);
        assert_eq!(item.owning_collection, Some(collection));
        assert!(item.template_item_of.is_none());
    }

    #[test]
    fn deserializes_without_optional_links() {
        let json = r#"{
            "id": "6f1d1b6e-4d1f-4f0e-9a55-0c2c1c3e9a01",
            "in_archive": true,
            "discoverable": false,
            "withdrawn": false,
            "last_modified": "2024-03-01T12:00:00Z"
        }"#;

        let item: Item = serde_json::from_str(json).expect("deserialize");
        assert!(item.handle.is_none());
        assert!(item.owning_collection.is_none());
        assert!(!item.discoverable);
    }
}
