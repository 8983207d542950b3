//! Item conversion.
//!
//! Builds an [`ItemRest`] in four steps: scalar fields, the bundle/bitstream
//! tree, the relationship list and the grouped metadata. Only the
//! relationship lookup is allowed to fail without failing the conversion.

use std::sync::Arc;

use libris_domain::{IndexableObject, Item, ItemId, MetadataQuery, Relationship};
use libris_shared::{BitstreamRest, ItemRest, MetadataRest, RelationshipRest};
use thiserror::Error;

use super::context::ContextResolver;
use super::metadata::MetadataConverter;
use super::repository_object::base_fields;
use crate::infrastructure::ports::{
    ContextError, ContextProvider, ConvertError, ItemRepo, RelationshipRepo, RepoError,
    RequestHandle, RestConverter,
};
use crate::infrastructure::settings::ConversionSettings;

/// Why an item's relationships could not be loaded.
#[derive(Debug, Error)]
pub enum RelationshipLookupError {
    #[error("could not obtain context: {0}")]
    Context(#[from] ContextError),
    #[error("relationship query failed: {0}")]
    Query(#[from] RepoError),
}

pub struct ItemConverter {
    converter: Arc<dyn RestConverter>,
    items: Arc<dyn ItemRepo>,
    relationships: Arc<dyn RelationshipRepo>,
    contexts: ContextResolver,
    metadata: MetadataConverter,
    settings: ConversionSettings,
}

impl ItemConverter {
    pub fn new(
        converter: Arc<dyn RestConverter>,
        items: Arc<dyn ItemRepo>,
        relationships: Arc<dyn RelationshipRepo>,
        contexts: Arc<dyn ContextProvider>,
        settings: ConversionSettings,
    ) -> Self {
        Self {
            converter,
            items,
            relationships,
            contexts: ContextResolver::new(contexts),
            metadata: MetadataConverter::new(),
            settings,
        }
    }

    /// Converts `item`, running graph lookups under `request`'s context or,
    /// without a request, under a standalone one.
    ///
    /// A failed relationship lookup is logged and yields an empty relationship
    /// list. Any other failure aborts the conversion.
    pub async fn convert(
        &self,
        item: &Item,
        request: Option<&RequestHandle>,
    ) -> Result<ItemRest, ConvertError> {
        let mut rest = self.base(item)?;
        rest.bitstreams = self.bitstreams(item).await?;
        rest.relationships = self.relationships(item, request).await?;
        rest.metadata = self.metadata(item).await?;

        tracing::debug!(
            item_id = %item.id,
            bitstreams = rest.bitstreams.len(),
            relationships = rest.relationships.len(),
            metadata_keys = rest.metadata.len(),
            "Converted item"
        );
        Ok(rest)
    }

    /// Loads the item and converts it.
    pub async fn convert_by_id(
        &self,
        id: ItemId,
        request: Option<&RequestHandle>,
    ) -> Result<ItemRest, ConvertError> {
        let item = self
            .items
            .get(id)
            .await?
            .ok_or_else(|| RepoError::not_found("Item", id))?;
        self.convert(&item, request).await
    }

    /// Whether a search result is something this converter handles.
    pub fn supports_model(&self, object: &IndexableObject) -> bool {
        object.as_item().is_some()
    }

    pub async fn convert_indexable(
        &self,
        object: &IndexableObject,
        request: Option<&RequestHandle>,
    ) -> Result<ItemRest, ConvertError> {
        match object.as_item() {
            Some(item) => self.convert(item, request).await,
            None => Err(ConvertError::UnsupportedModel(object.object_type().as_str())),
        }
    }

    // =========================================================================
    // Steps
    // =========================================================================

    fn base(&self, item: &Item) -> Result<ItemRest, ConvertError> {
        let mut rest = ItemRest::new(
            base_fields(item),
            item.in_archive,
            item.discoverable,
            item.withdrawn,
            item.last_modified,
        );
        if let Some(collection) = &item.owning_collection {
            rest.owning_collection = Some(self.converter.collection(collection)?);
        }
        if let Some(collection) = &item.template_item_of {
            rest.template_item_of = Some(self.converter.collection(collection)?);
        }
        Ok(rest)
    }

    /// Every bitstream of every bundle, bundle order then bitstream order.
    async fn bitstreams(&self, item: &Item) -> Result<Vec<BitstreamRest>, ConvertError> {
        let mut bitstreams = Vec::new();
        for bundle in self.items.bundles(item.id).await? {
            for bitstream in self.items.bitstreams(bundle.id).await? {
                bitstreams.push(self.converter.bitstream(&bitstream)?);
            }
        }
        Ok(bitstreams)
    }

    async fn relationships(
        &self,
        item: &Item,
        request: Option<&RequestHandle>,
    ) -> Result<Vec<RelationshipRest>, ConvertError> {
        let relationships = self
            .find_relationships(item, request)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(
                    item_id = %item.id,
                    handle = item.handle.as_deref().unwrap_or_default(),
                    error = %e,
                    "Error retrieving relationships for item"
                );
                Vec::new()
            });

        relationships
            .iter()
            .map(|relationship| self.converter.relationship(relationship))
            .collect()
    }

    async fn find_relationships(
        &self,
        item: &Item,
        request: Option<&RequestHandle>,
    ) -> Result<Vec<Relationship>, RelationshipLookupError> {
        let context = self.contexts.resolve(request).await?;
        Ok(self.relationships.find_by_item(&context, item.id).await?)
    }

    async fn metadata(&self, item: &Item) -> Result<MetadataRest, ConvertError> {
        let values = self
            .items
            .metadata(
                item.id,
                &MetadataQuery::any(),
                self.settings.include_virtual_metadata,
            )
            .await?;
        Ok(self.metadata.convert(&values))
    }
}
