//! REST representations.
//!
//! Field names follow the public API's camelCase convention.

mod bitstream;
mod collection;
mod item;
mod metadata;
mod relationship;
mod repository_object;

pub use bitstream::{BitstreamRest, ChecksumRest};
pub use collection::CollectionRest;
pub use item::ItemRest;
pub use metadata::{MetadataRest, MetadataValueRest};
pub use relationship::{RelationshipRest, RelationshipTypeRest};
pub use repository_object::RepositoryObjectRest;
