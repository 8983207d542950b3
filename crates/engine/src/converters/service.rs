//! Default generic converter for collections, bitstreams and relationships.

use libris_domain::{Bitstream, Collection, Relationship};
use libris_shared::{
    BitstreamRest, ChecksumRest, CollectionRest, RelationshipRest, RelationshipTypeRest,
};

use super::repository_object::base_fields;
use crate::infrastructure::ports::{ConvertError, RestConverter};

#[derive(Debug, Clone, Copy, Default)]
pub struct ConverterService;

impl ConverterService {
    pub fn new() -> Self {
        Self
    }
}

impl RestConverter for ConverterService {
    fn collection(&self, collection: &Collection) -> Result<CollectionRest, ConvertError> {
        Ok(CollectionRest {
            base: base_fields(collection),
        })
    }

    fn bitstream(&self, bitstream: &Bitstream) -> Result<BitstreamRest, ConvertError> {
        if bitstream.checksum.algorithm.trim().is_empty() {
            return Err(ConvertError::conversion(
                "Bitstream",
                bitstream.id,
                "checksum algorithm is missing",
            ));
        }

        Ok(BitstreamRest {
            base: base_fields(bitstream),
            size_bytes: bitstream.size_bytes,
            check_sum: ChecksumRest {
                algorithm: bitstream.checksum.algorithm.clone(),
                value: bitstream.checksum.value.clone(),
            },
            sequence_id: bitstream.sequence_id,
            format: bitstream.format.clone(),
            description: bitstream.description.clone(),
        })
    }

    fn relationship(&self, relationship: &Relationship) -> Result<RelationshipRest, ConvertError> {
        let kind = &relationship.relationship_type;
        Ok(RelationshipRest {
            id: relationship.id.to_uuid(),
            relationship_type: RelationshipTypeRest {
                id: kind.id.to_uuid(),
                leftward_type: kind.leftward_type.clone(),
                rightward_type: kind.rightward_type.clone(),
            },
            left_id: relationship.left_item.to_uuid(),
            right_id: relationship.right_item.to_uuid(),
            left_place: relationship.left_place,
            right_place: relationship.right_place,
            leftward_value: relationship.leftward_value.clone(),
            rightward_value: relationship.rightward_value.clone(),
            object_type: RelationshipRest::TYPE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::bitstream;
    use libris_domain::{Checksum, ItemId, RelationshipType};

    #[test]
    fn bitstream_keeps_file_details() {
        let file = bitstream("thesis.pdf")
            .with_format("application/pdf")
            .with_sequence_id(1);

        let rest = ConverterService::new().bitstream(&file).expect("convert");

        assert_eq!(rest.base.uuid, file.id.to_uuid());
        assert_eq!(rest.base.object_type, "bitstream");
        assert_eq!(rest.base.name.as_deref(), Some("thesis.pdf"));
        assert_eq!(rest.size_bytes, file.size_bytes);
        assert_eq!(rest.check_sum.algorithm, "MD5");
        assert_eq!(rest.format.as_deref(), Some("application/pdf"));
        assert_eq!(rest.sequence_id, Some(1));
    }

    #[test]
    fn bitstream_without_checksum_algorithm_is_rejected() {
        let file = Bitstream::new(
            "broken.bin",
            10,
            Checksum {
                algorithm: String::new(),
                value: "00".to_string(),
            },
        );

        let err = ConverterService::new().bitstream(&file).expect_err("rejected");

        assert!(matches!(
            err,
            ConvertError::Conversion {
                entity_type: "Bitstream",
                ..
            }
        ));
    }

    #[test]
    fn relationship_maps_both_sides() {
        let left = ItemId::new();
        let right = ItemId::new();
        let mut relationship = Relationship::new(
            RelationshipType::new("isAuthorOfPublication", "isPublicationOfAuthor"),
            left,
            right,
        );
        relationship.left_place = 1;
        relationship.rightward_value = Some("J. Doe".to_string());

        let rest = ConverterService::new()
            .relationship(&relationship)
            .expect("convert");

        assert_eq!(rest.id, relationship.id.to_uuid());
        assert_eq!(rest.left_id, left.to_uuid());
        assert_eq!(rest.right_id, right.to_uuid());
        assert_eq!(rest.left_place, 1);
        assert_eq!(rest.relationship_type.leftward_type, "isAuthorOfPublication");
        assert_eq!(rest.rightward_value.as_deref(), Some("J. Doe"));
        assert_eq!(rest.object_type, "relationship");
    }

    #[test]
    fn collection_uses_base_fields() {
        let collection = Collection::new("Theses");
        let rest = ConverterService::new()
            .collection(&collection)
            .expect("convert");
        assert_eq!(rest.base.object_type, "collection");
        assert_eq!(rest.base.uuid, collection.id.to_uuid());
    }
}
