//! Persistence capability for the index and collection files.

use ezmenu_fs::{MenuFile, NormalizedPath, RobustnessConfig, io};

use crate::Result;
use crate::model::{CollectionEntry, CollectionPayload};

/// Where the collection index and the per-collection files live.
pub trait CollectionStore {
    /// The persisted index, or `None` if there is none yet.
    fn read_index(&self) -> Result<Option<Vec<CollectionEntry>>>;

    fn write_index(&mut self, entries: &[CollectionEntry]) -> Result<()>;

    /// The stored payload of collection `id`, or `None` if there is none.
    fn read_payload(&self, id: &str) -> Result<Option<CollectionPayload>>;

    fn write_payload(&mut self, payload: &CollectionPayload) -> Result<()>;

    /// Delete the payload of collection `id`; a missing file is not an error.
    fn remove_payload(&mut self, id: &str) -> Result<()>;
}

/// Stores everything as JSON files in one directory served to the menu:
/// `setlist.json` for the index and `<id>.json` per collection.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: NormalizedPath,
    robustness: RobustnessConfig,
}

impl DirectoryStore {
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            robustness: RobustnessConfig::default(),
        }
    }

    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.robustness = robustness;
        self
    }

    /// Path of the index file.
    pub fn index_path(&self) -> NormalizedPath {
        self.root.join(MenuFile::Index.as_str())
    }

    /// Path of the payload file of collection `id`.
    pub fn payload_path(&self, id: &str) -> NormalizedPath {
        self.root.join(&MenuFile::payload(id))
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &NormalizedPath) -> Result<Option<T>> {
        match io::read_text(path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let content = serde_json::to_string(value)?;
        io::write_atomic(path, content.as_bytes(), self.robustness)?;
        tracing::debug!(path = %path, "Wrote file");
        Ok(())
    }
}

impl CollectionStore for DirectoryStore {
    fn read_index(&self) -> Result<Option<Vec<CollectionEntry>>> {
        Self::read_json(&self.index_path())
    }

    fn write_index(&mut self, entries: &[CollectionEntry]) -> Result<()> {
        self.write_json(&self.index_path(), entries)
    }

    fn read_payload(&self, id: &str) -> Result<Option<CollectionPayload>> {
        Self::read_json(&self.payload_path(id))
    }

    fn write_payload(&mut self, payload: &CollectionPayload) -> Result<()> {
        self.write_json(&self.payload_path(&payload.id), payload)
    }

    fn remove_payload(&mut self, id: &str) -> Result<()> {
        let path = self.payload_path(id);
        if io::remove_file(&path)? {
            tracing::debug!(path = %path, "Removed file");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinkItem;
    use tempfile::TempDir;

    fn store() -> (TempDir, DirectoryStore) {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::new(NormalizedPath::new(dir.path()));
        (dir, store)
    }

    #[test]
    fn missing_files_read_as_none() {
        let (_dir, store) = store();
        assert!(store.read_index().unwrap().is_none());
        assert!(store.read_payload("X").unwrap().is_none());
    }

    #[test]
    fn payload_round_trips() {
        let (dir, mut store) = store();
        let payload = CollectionPayload {
            name: "Foo".into(),
            id: "X".into(),
            items: vec![LinkItem {
                title: "T".into(),
                url: "http://a".into(),
                proxied: false,
                free: true,
                description: None,
            }],
        };

        store.write_payload(&payload).unwrap();

        assert!(dir.path().join("X.json").exists());
        assert_eq!(store.read_payload("X").unwrap(), Some(payload));
    }

    #[test]
    fn corrupt_index_is_an_error() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("setlist.json"), "[{").unwrap();

        assert!(matches!(store.read_index(), Err(crate::Error::Json(_))));
    }

    #[test]
    fn removing_missing_payload_is_ok() {
        let (_dir, mut store) = store();
        store.remove_payload("gone").unwrap();
    }
}
