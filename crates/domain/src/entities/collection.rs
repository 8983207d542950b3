//! Collection entity - Owner of archived items

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{ObjectType, RepositoryObject};
use crate::CollectionId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    #[serde(default)]
    pub handle: Option<String>,
    pub name: String,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CollectionId::new(),
            handle: None,
            name: name.into(),
        }
    }

    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }
}

impl RepositoryObject for Collection {
    fn uuid(&self) -> Uuid {
        self.id.to_uuid()
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }

    fn object_type(&self) -> ObjectType {
        ObjectType::Collection
    }
}
