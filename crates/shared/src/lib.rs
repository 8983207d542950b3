//! Libris Shared - REST representations of repository content
//!
//! This crate contains the client-facing shapes produced by the engine's
//! converters and handed to whatever layer serializes them.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, uuid and chrono
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `uuid::Uuid` in DTOs
//! 4. **Never null sequences** - list and map fields always serialize, empty or not

pub mod rest;

pub use rest::{
    BitstreamRest, ChecksumRest, CollectionRest, ItemRest, MetadataRest, MetadataValueRest,
    RelationshipRest, RelationshipTypeRest, RepositoryObjectRest,
};
