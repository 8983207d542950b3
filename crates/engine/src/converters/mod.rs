//! Domain → REST converters.
//!
//! `ItemConverter` is the only converter that walks a graph; the others map
//! one entity at a time and sit behind the `RestConverter` port.

mod context;
mod item;
mod metadata;
mod repository_object;
mod service;

pub use context::ContextResolver;
pub use item::{ItemConverter, RelationshipLookupError};
pub use metadata::MetadataConverter;
pub use repository_object::base_fields;
pub use service::ConverterService;
