use serde::{Deserialize, Serialize};

use super::RepositoryObjectRest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRest {
    #[serde(flatten)]
    pub base: RepositoryObjectRest,
}
