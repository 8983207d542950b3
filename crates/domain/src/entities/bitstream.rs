//! Bitstream entity - A stored file belonging to a bundle

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{ObjectType, RepositoryObject};
use crate::BitstreamId;

/// Checksum recorded when the file was ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    /// e.g. `MD5`
    pub algorithm: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitstream {
    pub id: BitstreamId,
    pub name: String,
    pub size_bytes: u64,
    pub checksum: Checksum,
    /// Position assigned at ingest; unique within an item.
    #[serde(default)]
    pub sequence_id: Option<i32>,
    /// MIME type, when the format registry recognised the file.
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Bitstream {
    pub fn new(name: impl Into<String>, size_bytes: u64, checksum: Checksum) -> Self {
        Self {
            id: BitstreamId::new(),
            name: name.into(),
            size_bytes,
            checksum,
            sequence_id: None,
            format: None,
            description: None,
        }
    }

    pub fn with_format(mut self, mime: impl Into<String>) -> Self {
        self.format = Some(mime.into());
        self
    }

    pub fn with_sequence_id(mut self, sequence_id: i32) -> Self {
        self.sequence_id = Some(sequence_id);
        self
    }
}

impl RepositoryObject for Bitstream {
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
        ObjectType::Bitstream
    }
}
