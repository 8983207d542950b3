//! Repository port traits for persistence reads.

use async_trait::async_trait;
use libris_domain::{
    Bitstream, Bundle, BundleId, Item, ItemId, MetadataQuery, MetadataValue, Relationship,
};

use super::error::RepoError;
use super::types::Context;

// =============================================================================
// Item content
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepo: Send + Sync {
    async fn get(&self, id: ItemId) -> Result<Option<Item>, RepoError>;

    /// Bundles of an item, in the item's bundle order.
    async fn bundles(&self, item_id: ItemId) -> Result<Vec<Bundle>, RepoError>;

    /// Bitstreams of a bundle, in the bundle's bitstream order.
    async fn bitstreams(&self, bundle_id: BundleId) -> Result<Vec<Bitstream>, RepoError>;

    /// Metadata values matching `query`, in stable storage order.
    ///
    /// With `include_virtual`, values derived from the item's relationships
    /// are appended after the stored ones.
    async fn metadata(
        &self,
        item_id: ItemId,
        query: &MetadataQuery,
        include_virtual: bool,
    ) -> Result<Vec<MetadataValue>, RepoError>;
}

// =============================================================================
// Relationships
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelationshipRepo: Send + Sync {
    /// Every relationship in which the item is the left or right participant.
    async fn find_by_item(
        &self,
        context: &Context,
        item_id: ItemId,
    ) -> Result<Vec<Relationship>, RepoError>;
}
