//! Objects handed over by the search index.
//!
//! Search results come back as a mix of entity kinds; converters inspect the
//! variant to decide whether they can handle a result.

use crate::entities::{Bitstream, Collection, Item, ObjectType, RepositoryObject};

#[derive(Debug, Clone, PartialEq)]
pub enum IndexableObject {
    Item(Item),
    Collection(Collection),
    Bitstream(Bitstream),
}

impl IndexableObject {
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Item(item) => item.object_type(),
            Self::Collection(collection) => collection.object_type(),
            Self::Bitstream(bitstream) => bitstream.object_type(),
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }
}

impl From<Item> for IndexableObject {
    fn from(item: Item) -> Self {
        Self::Item(item)
    }
}

impl From<Collection> for IndexableObject {
    fn from(collection: Collection) -> Self {
        Self::Collection(collection)
    }
}

impl From<Bitstream> for IndexableObject {
    fn from(bitstream: Bitstream) -> Self {
        Self::Bitstream(bitstream)
    }
}
