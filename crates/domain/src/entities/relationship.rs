//! Relationship entity - A typed edge between two items
//!
//! Relationships are not embedded in either item; they are stored on their
//! own and found by querying for an item's participation.
//!
//! ```text
//! (left:Item)-[:isAuthorOfPublication / isPublicationOfAuthor]->(right:Item)
//! ```

use serde::{Deserialize, Serialize};

use crate::{ItemId, RelationshipId, RelationshipTypeId};

/// Labels of a relationship type as seen from each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipType {
    pub id: RelationshipTypeId,
    /// Label read from the left item, e.g. `isAuthorOfPublication`
    pub leftward_type: String,
    /// Label read from the right item, e.g. `isPublicationOfAuthor`
    pub rightward_type: String,
}

impl RelationshipType {
    pub fn new(leftward_type: impl Into<String>, rightward_type: impl Into<String>) -> Self {
        Self {
            id: RelationshipTypeId::new(),
            leftward_type: leftward_type.into(),
            rightward_type: rightward_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelationshipId,
    pub relationship_type: RelationshipType,
    pub left_item: ItemId,
    pub right_item: ItemId,
    /// Order of this relationship among the left item's relationships of this type
    #[serde(default)]
    pub left_place: i32,
    /// Order of this relationship among the right item's relationships of this type
    #[serde(default)]
    pub right_place: i32,
    /// Free-text override of the left label (e.g. a name variant)
    #[serde(default)]
    pub leftward_value: Option<String>,
    #[serde(default)]
    pub rightward_value: Option<String>,
}

impl Relationship {
    pub fn new(relationship_type: RelationshipType, left_item: ItemId, right_item: ItemId) -> Self {
        Self {
            id: RelationshipId::new(),
            relationship_type,
            left_item,
            right_item,
            left_place: 0,
            right_place: 0,
            leftward_value: None,
            rightward_value: None,
        }
    }

    pub fn involves(&self, item: ItemId) -> bool {
        self.left_item == item || self.right_item == item
    }

    /// The item on the other end of the edge, or `None` if `item` does not participate.
    pub fn counterpart_of(&self, item: ItemId) -> Option<ItemId> {
        if self.left_item == item {
            Some(self.right_item)
        } else if self.right_item == item {
            Some(self.left_item)
        } else {
            None
        }
    }

    /// Type label and place as seen from `item`'s side.
    pub fn side_of(&self, item: ItemId) -> Option<(&str, i32)> {
        if self.left_item == item {
            Some((&self.relationship_type.leftward_type, self.left_place))
        } else if self.right_item == item {
            Some((&self.relationship_type.rightward_type, self.right_place))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorship() -> RelationshipType {
        RelationshipType::new("isAuthorOfPublication", "isPublicationOfAuthor")
    }

    #[test]
    fn counterpart_resolves_both_directions() {
        let person = ItemId::new();
        let publication = ItemId::new();
        let rel = Relationship::new(authorship(), person, publication);

        assert_eq!(rel.counterpart_of(person), Some(publication));
        assert_eq!(rel.counterpart_of(publication), Some(person));
        assert_eq!(rel.counterpart_of(ItemId::new()), None);
    }

    #[test]
    fn side_of_uses_label_and_place_for_that_side() {
        let person = ItemId::new();
        let publication = ItemId::new();
        let mut rel = Relationship::new(authorship(), person, publication);
        rel.left_place = 2;
        rel.right_place = 5;

        assert_eq!(rel.side_of(person), Some(("isAuthorOfPublication", 2)));
        assert_eq!(rel.side_of(publication), Some(("isPublicationOfAuthor", 5)));
        assert!(!rel.involves(ItemId::new()));
    }
}
