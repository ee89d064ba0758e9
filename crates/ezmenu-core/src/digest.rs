//! Content fingerprints for change detection.
//!
//! A digest is the SHA-256 checksum of the compact JSON serialization of a
//! value. Sequences and struct fields serialize in a fixed order, so equal
//! ordered content always yields the same digest. Digests are only compared
//! for equality and never persisted.

use ezmenu_fs::checksum::compute_bytes_checksum;
use serde::Serialize;

use crate::Result;
use crate::model::LinkItem;

/// Fingerprint an arbitrary serializable value.
pub fn digest<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let canonical = serde_json::to_vec(value)?;
    Ok(compute_bytes_checksum(&canonical))
}

/// Fingerprint the link list of a collection.
///
/// Only the links are hashed, not the collection metadata around them.
pub fn payload_digest(items: &[LinkItem]) -> Result<String> {
    digest(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(title: &str, free: bool) -> LinkItem {
        LinkItem {
            title: title.to_string(),
            url: format!("http://{title}.example"),
            proxied: false,
            free,
            description: None,
        }
    }

    #[test]
    fn digest_is_deterministic() {
        let items = vec![item("a", true), item("b", false)];
        assert_eq!(payload_digest(&items).unwrap(), payload_digest(&items.clone()).unwrap());
    }

    #[test]
    fn digest_changes_with_order() {
        let forward = vec![item("a", true), item("b", false)];
        let backward = vec![item("b", false), item("a", true)];
        assert_ne!(payload_digest(&forward).unwrap(), payload_digest(&backward).unwrap());
    }

    #[test]
    fn digest_changes_with_content() {
        let before = vec![item("a", true)];
        let after = vec![item("a", false)];
        assert_ne!(payload_digest(&before).unwrap(), payload_digest(&after).unwrap());
    }

    #[test]
    fn empty_payload_has_stable_digest() {
        assert_eq!(payload_digest(&[]).unwrap(), digest(&Vec::<LinkItem>::new()).unwrap());
    }

    proptest! {
        #[test]
        fn distinct_title_lists_have_distinct_digests(
            a in prop::collection::vec("[a-z]{1,6}", 0..6),
            b in prop::collection::vec("[a-z]{1,6}", 0..6),
        ) {
            let left: Vec<LinkItem> = a.iter().map(|t| item(t, true)).collect();
            let right: Vec<LinkItem> = b.iter().map(|t| item(t, true)).collect();
            prop_assert_eq!(a == b, payload_digest(&left).unwrap() == payload_digest(&right).unwrap());
        }
    }
}
