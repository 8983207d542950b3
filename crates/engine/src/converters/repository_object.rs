//! Common fields of every repository object.

use libris_domain::RepositoryObject;
use libris_shared::RepositoryObjectRest;

/// Maps the identity fields shared by items, bundles, bitstreams and collections.
pub fn base_fields(object: &impl RepositoryObject) -> RepositoryObjectRest {
    RepositoryObjectRest {
        uuid: object.uuid(),
        name: object.name().map(str::to_string),
        handle: object.handle().map(str::to_string),
        object_type: object.object_type().as_str().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libris_domain::Collection;

    #[test]
    fn copies_identity_fields() {
        let collection = Collection::new("Theses").with_handle("123456789/7");

        let rest = base_fields(&collection);

        assert_eq!(rest.uuid, collection.id.to_uuid());
        assert_eq!(rest.name.as_deref(), Some("Theses"));
        assert_eq!(rest.handle.as_deref(), Some("123456789/7"));
        assert_eq!(rest.object_type, "collection");
    }
}
