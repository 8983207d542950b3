use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BitstreamRest, CollectionRest, MetadataRest, RelationshipRest, RepositoryObjectRest};

/// Flattened item as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRest {
    #[serde(flatten)]
    pub base: RepositoryObjectRest,
    pub in_archive: bool,
    pub discoverable: bool,
    pub withdrawn: bool,
    pub last_modified: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owning_collection: Option<CollectionRest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_item_of: Option<CollectionRest>,
    /// Every bitstream of every bundle, bundle order first.
    #[serde(default)]
    pub bitstreams: Vec<BitstreamRest>,
    #[serde(default)]
    pub relationships: Vec<RelationshipRest>,
    #[serde(default)]
    pub metadata: MetadataRest,
}

impl ItemRest {
    pub const TYPE: &'static str = "item";

    /// Item with only scalar fields set; graph and metadata fields start empty.
    pub fn new(
        base: RepositoryObjectRest,
        in_archive: bool,
        discoverable: bool,
        withdrawn: bool,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            base,
            in_archive,
            discoverable,
            withdrawn,
            last_modified,
            owning_collection: None,
            template_item_of: None,
            bitstreams: Vec::new(),
            relationships: Vec::new(),
            metadata: MetadataRest::new(),
        }
    }
}
