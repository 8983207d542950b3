//! Bundle entity - Named grouping of an item's bitstreams
//!
//! Bitstream membership is an ordered edge stored by the persistence layer,
//! so a bundle only carries its own identity here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{ObjectType, RepositoryObject};
use crate::BundleId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: BundleId,
    /// e.g. `ORIGINAL`, `THUMBNAIL`, `LICENSE`
    pub name: String,
}

impl Bundle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BundleId::new(),
            name: name.into(),
        }
    }
}

impl RepositoryObject for Bundle {
    fn uuid(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn handle(&self) -> Option<&str> {
        None
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::Bundle
    }
}
