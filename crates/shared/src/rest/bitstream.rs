use serde::{Deserialize, Serialize};

use super::RepositoryObjectRest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumRest {
    #[serde(rename = "checkSumAlgorithm")]
    pub algorithm: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitstreamRest {
    #[serde(flatten)]
    pub base: RepositoryObjectRest,
    pub size_bytes: u64,
    pub check_sum: ChecksumRest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<i32>,
    /// MIME type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
