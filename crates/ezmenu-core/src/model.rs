//! Collection data model.
//!
//! The index is keyed by collection id while a sync pass reconciles it and
//! is a plain ordered list on disk; [`CollectionIndex::from_entries`] and
//! [`CollectionIndex::into_entries`] convert between the two.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Logo tag for collections defined in the remote catalog.
pub const REMOTE_LOGO: &str = "one";

/// A collection as listed by the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCollection {
    pub id: String,
    pub name: String,
    /// Query URL for the collection's contents.
    pub url: String,
}

/// One entry of the collection index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub id: String,
    pub name: String,
    /// Source URL; only needed while fetching and never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Seconds since the epoch of the last content change.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "epoch_string"
    )]
    pub timestamp: Option<i64>,
    /// Menu icon tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl CollectionEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: None,
            timestamp: None,
            logo: None,
        }
    }
}

impl From<RemoteCollection> for CollectionEntry {
    fn from(remote: RemoteCollection) -> Self {
        Self {
            id: remote.id,
            name: remote.name,
            url: Some(remote.url),
            timestamp: None,
            logo: Some(REMOTE_LOGO.to_string()),
        }
    }
}

/// A link shown in a collection's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub title: String,
    pub url: String,
    /// The URL goes through the proxy.
    pub proxied: bool,
    /// The resource is freely accessible.
    pub free: bool,
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The contents of one collection file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPayload {
    pub name: String,
    pub id: String,
    #[serde(rename = "data")]
    pub items: Vec<LinkItem>,
}

/// Collections keyed by id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionIndex {
    entries: IndexMap<String, CollectionEntry>,
}

impl CollectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key an on-disk entry list by id. A later duplicate replaces an
    /// earlier one in place.
    pub fn from_entries(entries: impl IntoIterator<Item = CollectionEntry>) -> Self {
        let mut index = Self::new();
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// The ordered entry list as persisted on disk.
    pub fn into_entries(self) -> Vec<CollectionEntry> {
        self.entries.into_values().collect()
    }

    /// Insert or replace the entry with the same id, keeping its position.
    pub fn insert(&mut self, entry: CollectionEntry) -> Option<CollectionEntry> {
        self.entries.insert(entry.id.clone(), entry)
    }

    pub fn remove(&mut self, id: &str) -> Option<CollectionEntry> {
        self.entries.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&CollectionEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollectionEntry> {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CollectionEntry> {
        self.entries.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Timestamps are stored as decimal strings; numbers are accepted on read.
mod epoch_string {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    pub fn serialize<S: Serializer>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(secs) => serializer.serialize_str(&secs.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(secs)) => Ok(Some(secs)),
            Some(Raw::Text(text)) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid timestamp {text:?}"))),
        }
    }
}
