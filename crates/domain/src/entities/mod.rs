//! Repository content entities.
//!
//! Items are the core content unit. Bundles group an item's bitstreams,
//! collections own items, and relationships are typed edges between items
//! that live outside either item.

mod bitstream;
mod bundle;
mod collection;
mod item;
mod relationship;

pub use bitstream::{Bitstream, Checksum};
pub use bundle::Bundle;
pub use collection::Collection;
pub use item::Item;
pub use relationship::{Relationship, RelationshipType};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of addressable repository object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Item,
    Bundle,
    Bitstream,
    Collection,
}

impl ObjectType {
    /// Lower-case name used as the `type` field of wire representations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Bundle => "bundle",
            Self::Bitstream => "bitstream",
            Self::Collection => "collection",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every addressable repository object.
///
/// Converters use this to fill the common part of a wire representation
/// without knowing the concrete entity.
pub trait RepositoryObject {
    fn uuid(&self) -> Uuid;
    fn name(&self) -> Option<&str>;
    fn handle(&self) -> Option<&str>;
    fn object_type(&self) -> ObjectType;
}
