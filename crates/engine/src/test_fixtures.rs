//! Builders for domain objects used across unit tests.

use chrono::{TimeZone, Utc};
use libris_domain::{Bitstream, Checksum, Collection, Item, MetadataField, MetadataValue};

pub fn collection(name: &str) -> Collection {
    Collection::new(name).with_handle("123456789/2")
}

/// Archived item with a fixed modification time.
pub fn publication(title: &str) -> Item {
    let last_modified = Utc
        .with_ymd_and_hms(2024, 5, 17, 9, 30, 0)
        .single()
        .unwrap_or_else(Utc::now);
    Item::new(last_modified)
        .with_name(title)
        .with_handle("123456789/100")
        .archived_in(collection("Publications"))
}

pub fn bitstream(name: &str) -> Bitstream {
    Bitstream::new(
        name,
        1024,
        Checksum {
            algorithm: "MD5".to_string(),
            value: "9e107d9d372bb6826bd81d3542a419d6".to_string(),
        },
    )
}

pub fn field(key: &str) -> MetadataField {
    key.parse().expect("valid metadata field")
}

pub fn value(key: &str, value: &str) -> MetadataValue {
    MetadataValue::new(field(key), value)
}
