//! Catalog capability.

use crate::Result;
use crate::model::{CollectionEntry, RemoteCollection};

/// Access to the remote catalog.
///
/// Implementations own transport and authentication; the engine only sees
/// the shapes below. Each call either returns or fails; deadlines belong to
/// the implementation.
pub trait CatalogSource {
    /// The catalog's list of predefined collections, in catalog order.
    fn fetch_collection_list(&mut self) -> Result<Vec<RemoteCollection>>;

    /// The raw envelope for one collection, requested with `callback` as
    /// the wrapping function name.
    ///
    /// `entry.url` is absent when the entry comes from the on-disk index.
    fn fetch_collection(&mut self, entry: &CollectionEntry, callback: &str) -> Result<String>;
}
