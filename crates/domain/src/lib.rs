//! Libris Domain - repository content model.
//!
//! Items, their bundles and bitstreams, owning collections, item-to-item
//! relationships and descriptive metadata. Pure data and invariants only;
//! persistence lives behind the engine's ports.

pub mod entities;
pub mod error;
pub mod ids;
pub mod indexable;
pub mod metadata;

pub use entities::{
    Bitstream, Bundle, Checksum, Collection, Item, ObjectType, Relationship, RelationshipType,
    RepositoryObject,
};

pub use error::DomainError;

pub use ids::{BitstreamId, BundleId, CollectionId, ItemId, RelationshipId, RelationshipTypeId};

pub use indexable::IndexableObject;

pub use metadata::{
    MetadataField, MetadataQuery, MetadataValue, Selector, CONFIDENCE_ACCEPTED, CONFIDENCE_UNSET,
};
