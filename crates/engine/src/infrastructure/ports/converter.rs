//! Generic converter port for the non-graph entities an item references.

use libris_domain::{Bitstream, Collection, Relationship};
use libris_shared::{BitstreamRest, CollectionRest, RelationshipRest};

use super::error::ConvertError;

#[cfg_attr(test, mockall::automock)]
pub trait RestConverter: Send + Sync {
    fn collection(&self, collection: &Collection) -> Result<CollectionRest, ConvertError>;

    fn bitstream(&self, bitstream: &Bitstream) -> Result<BitstreamRest, ConvertError>;

    fn relationship(&self, relationship: &Relationship) -> Result<RelationshipRest, ConvertError>;
}
