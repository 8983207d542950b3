use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields common to every addressable repository object.
///
/// Embedded (flattened) into the concrete representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryObjectRest {
    pub uuid: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    /// Lower-case object kind, e.g. `item`
    #[serde(rename = "type")]
    pub object_type: String,
}
