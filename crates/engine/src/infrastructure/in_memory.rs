//! In-memory repository backed by a JSON snapshot.
//!
//! Used by the command-line renderer and by tests that want real port
//! behaviour without a database. The repository is immutable once loaded.

use std::collections::HashMap;

use async_trait::async_trait;
use libris_domain::{
    Bitstream, Bundle, BundleId, Item, ItemId, MetadataField, MetadataQuery, MetadataValue,
    Relationship, CONFIDENCE_ACCEPTED,
};
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::{Context, ItemRepo, RelationshipRepo, RepoError};

/// Schema holding metadata derived from relationships.
pub const VIRTUAL_SCHEMA: &str = "relation";

// =============================================================================
// Snapshot format
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    #[serde(default)]
    pub items: Vec<ItemRecord>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub item: Item,
    #[serde(default)]
    pub bundles: Vec<BundleRecord>,
    #[serde(default)]
    pub metadata: Vec<MetadataValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleRecord {
    pub bundle: Bundle,
    #[serde(default)]
    pub bitstreams: Vec<Bitstream>,
}

// =============================================================================
// Repository
// =============================================================================

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    items: HashMap<ItemId, Item>,
    bundles: HashMap<ItemId, Vec<Bundle>>,
    bitstreams: HashMap<BundleId, Vec<Bitstream>>,
    metadata: HashMap<ItemId, Vec<MetadataValue>>,
    relationships: Vec<Relationship>,
}

impl InMemoryRepository {
    pub fn from_snapshot(snapshot: RepositorySnapshot) -> Self {
        let mut repo = Self {
            relationships: snapshot.relationships,
            ..Self::default()
        };

        for record in snapshot.items {
            let item_id = record.item.id;
            let mut bundles = Vec::with_capacity(record.bundles.len());
            for bundle_record in record.bundles {
                repo.bitstreams
                    .insert(bundle_record.bundle.id, bundle_record.bitstreams);
                bundles.push(bundle_record.bundle);
            }
            repo.bundles.insert(item_id, bundles);
            repo.metadata.insert(item_id, record.metadata);
            repo.items.insert(item_id, record.item);
        }

        tracing::debug!(
            items = repo.items.len(),
            relationships = repo.relationships.len(),
            "Loaded repository snapshot"
        );
        repo
    }

    pub fn from_json(json: &str) -> Result<Self, RepoError> {
        let snapshot: RepositorySnapshot =
            serde_json::from_str(json).map_err(RepoError::serialization)?;
        Ok(Self::from_snapshot(snapshot))
    }

    fn require_item(&self, item_id: ItemId) -> Result<(), RepoError> {
        if self.items.contains_key(&item_id) {
            Ok(())
        } else {
            Err(RepoError::not_found("Item", item_id))
        }
    }

    /// One `relation.<label>` value per relationship the item takes part in,
    /// pointing at the item on the other end.
    fn virtual_metadata(&self, item_id: ItemId) -> Vec<MetadataValue> {
        let mut values = Vec::new();
        for relationship in self.relationships.iter().filter(|r| r.involves(item_id)) {
            let (Some((label, place)), Some(counterpart)) = (
                relationship.side_of(item_id),
                relationship.counterpart_of(item_id),
            ) else {
                continue;
            };

            let field = match MetadataField::new(VIRTUAL_SCHEMA, label, None) {
                Ok(field) => field,
                Err(e) => {
                    tracing::warn!(
                        relationship_id = %relationship.id,
                        error = %e,
                        "Skipping virtual metadata for unusable relationship label"
                    );
                    continue;
                }
            };

            values.push(
                MetadataValue::new(field, counterpart.to_string())
                    .with_authority(format!("virtual::{}", relationship.id), CONFIDENCE_ACCEPTED)
                    .with_place(place),
            );
        }
        values
    }
}

#[async_trait]
impl ItemRepo for InMemoryRepository {
    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepoError> {
        Ok(self.items.get(&id).cloned())
    }

    async fn bundles(&self, item_id: ItemId) -> Result<Vec<Bundle>, RepoError> {
        self.require_item(item_id)?;
        Ok(self.bundles.get(&item_id).cloned().unwrap_or_default())
    }

    async fn bitstreams(&self, bundle_id: BundleId) -> Result<Vec<Bitstream>, RepoError> {
        self.bitstreams
            .get(&bundle_id)
            .cloned()
            .ok_or_else(|| RepoError::not_found("Bundle", bundle_id))
    }

    async fn metadata(
        &self,
        item_id: ItemId,
        query: &MetadataQuery,
        include_virtual: bool,
    ) -> Result<Vec<MetadataValue>, RepoError> {
        self.require_item(item_id)?;

        let mut values: Vec<MetadataValue> = self
            .metadata
            .get(&item_id)
            .into_iter()
            .flatten()
            .filter(|value| query.matches(value))
            .cloned()
            .collect();

        if include_virtual {
            values.extend(
                self.virtual_metadata(item_id)
                    .into_iter()
                    .filter(|value| query.matches(value)),
            );
        }

        Ok(values)
    }
}

#[async_trait]
impl RelationshipRepo for InMemoryRepository {
    async fn find_by_item(
        &self,
        context: &Context,
        item_id: ItemId,
    ) -> Result<Vec<Relationship>, RepoError> {
        tracing::trace!(context_id = %context.id, %item_id, "Finding relationships");
        Ok(self
            .relationships
            .iter()
            .filter(|relationship| relationship.involves(item_id))
            .cloned()
            .collect())
    }
}
