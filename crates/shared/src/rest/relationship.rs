use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipTypeRest {
    pub id: Uuid,
    pub leftward_type: String,
    pub rightward_type: String,
}

/// A typed edge between two items, addressed by the item uuids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipRest {
    pub id: Uuid,
    pub relationship_type: RelationshipTypeRest,
    pub left_id: Uuid,
    pub right_id: Uuid,
    pub left_place: i32,
    pub right_place: i32,
    #[serde(default)]
    pub leftward_value: Option<String>,
    #[serde(default)]
    pub rightward_value: Option<String>,
    #[serde(rename = "type")]
    pub object_type: String,
}

impl RelationshipRest {
    pub const TYPE: &'static str = "relationship";
}
