//! Catalog responses read from a directory.
//!
//! The directory holds what a transport fetched from the catalog:
//! `collections.json` with the collection list and one `<callback>.jsonp`
//! file per collection, named after the callback it was requested with.

use ezmenu_core::{
    CatalogSource, CollectionEntry, Error, RemoteCollection, Result, extract_envelope,
};
use ezmenu_fs::{NormalizedPath, io};

/// File holding the collection list.
pub const COLLECTION_LIST: &str = "collections.json";

/// A [`CatalogSource`] over a directory of fetched responses.
pub struct SnapshotSource {
    dir: NormalizedPath,
}

impl SnapshotSource {
    pub fn new(dir: NormalizedPath) -> Self {
        Self { dir }
    }

    fn read(&self, file: &str, id: &str) -> Result<String> {
        let path = self.dir.join(file);
        tracing::debug!(path = %path, "Reading catalog response");
        io::read_text(&path).map_err(|e| Error::transport(id, e.to_string()))
    }
}

impl CatalogSource for SnapshotSource {
    fn fetch_collection_list(&mut self) -> Result<Vec<RemoteCollection>> {
        let text = self.read(COLLECTION_LIST, "collection list")?;
        // The list may be stored as plain JSON or still in its envelope.
        let value = match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => value,
            Err(_) => extract_envelope(&text, None)?,
        };
        Ok(serde_json::from_value(value)?)
    }

    fn fetch_collection(&mut self, entry: &CollectionEntry, callback: &str) -> Result<String> {
        self.read(&format!("{callback}.jsonp"), &entry.id)
    }
}
