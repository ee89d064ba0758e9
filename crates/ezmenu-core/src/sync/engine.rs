//! SyncEngine implementation
//!
//! One pass reconciles the catalog's collection list with the index on
//! disk, refreshes every collection whose content changed and rewrites the
//! index only when something in it changed.

use crate::catalog::{LinkStats, extract_envelope, link_items};
use crate::config::{EVERYTHING_ID, Settings};
use crate::digest::payload_digest;
use crate::error::{Error, Result};
use crate::model::{CollectionEntry, CollectionIndex, CollectionPayload};

use super::report::SyncReport;
use super::source::CatalogSource;
use super::store::CollectionStore;

type Clock = Box<dyn Fn() -> i64>;

/// Result of refreshing one collection.
enum Refresh {
    /// New content was written with a fresh timestamp.
    Written(CollectionEntry),
    /// Content unchanged; the previous index entry stays as it was.
    Unchanged(CollectionEntry),
}

/// Engine for synchronising collections.
///
/// The engine holds the settings and a clock; the catalog and the store are
/// handed to [`SyncEngine::run`] for each pass.
pub struct SyncEngine {
    settings: Settings,
    clock: Clock,
}

impl SyncEngine {
    /// Create an engine that stamps changes with the current time.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            clock: Box::new(|| chrono::Utc::now().timestamp()),
        }
    }

    /// Replace the clock used for change timestamps.
    pub fn with_clock(mut self, clock: impl Fn() -> i64 + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one synchronisation pass.
    ///
    /// Failures of individual collections are collected in the report and
    /// leave that collection's previous data untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::NoCollectionSource`] if the catalog list is unavailable
    ///   and there is no usable index on disk; nothing is written.
    /// - [`Error::NoUsableCollections`] if every collection failed and no
    ///   previous data is left to serve; the index is not written.
    /// - Store errors while removing collections or writing the index.
    pub fn run(
        &self,
        source: &mut dyn CatalogSource,
        store: &mut dyn CollectionStore,
    ) -> Result<SyncReport> {
        let mut report = SyncReport::default();

        let remote = match source.fetch_collection_list() {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "Collection list unavailable, trying the on-disk index");
                report.errors.push(format!("collection list: {e}"));
                Vec::new()
            }
        };

        let previous = match store.read_index() {
            Ok(Some(entries)) => Some(CollectionIndex::from_entries(entries)),
            Ok(None) => {
                tracing::info!("No index on disk, starting from scratch");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Index on disk is unreadable, starting from scratch");
                report.errors.push(format!("index: {e}"));
                None
            }
        };
        let mut dirty = previous.is_none();

        let remote_reachable = !remote.is_empty();
        let working = if remote_reachable {
            tracing::info!(collections = remote.len(), "Fetched collection list");
            let mut working = CollectionIndex::new();
            for collection in remote {
                let mut entry = CollectionEntry::from(collection);
                if let Some(url) = &entry.url {
                    match self.settings.rewrite_collection_url(url) {
                        Ok(rewritten) => entry.url = Some(rewritten),
                        Err(e) => {
                            tracing::warn!(collection = %entry.id, error = %e, "Keeping collection URL as listed")
                        }
                    }
                }
                working.insert(entry);
            }
            working.insert(self.settings.everything_entry());
            working
        } else if let Some(previous) = &previous {
            tracing::warn!(collections = previous.len(), "Using the on-disk collection list");
            report.used_fallback = true;
            let mut working = previous.clone();
            let everything_url = self.settings.everything_entry().url;
            for entry in working.iter_mut() {
                if entry.id == EVERYTHING_ID && entry.url.is_none() {
                    entry.url = everything_url.clone();
                }
            }
            working
        } else {
            return Err(Error::NoCollectionSource {
                reason: "the collection list could not be fetched and there is no index on disk"
                    .to_string(),
            });
        };

        let previous = previous.unwrap_or_default();

        let removed: Vec<String> = previous
            .ids()
            .filter(|id| !working.contains(id))
            .map(str::to_string)
            .collect();
        if working.ids().any(|id| !previous.contains(id)) {
            tracing::info!("Collection list has new collections");
            dirty = true;
        }

        let mut next = CollectionIndex::new();
        for entry in working.into_entries() {
            let id = entry.id.clone();
            match self.refresh(entry, previous.get(&id), source, store) {
                Ok(Refresh::Written(entry)) => {
                    report.updated.push(id);
                    next.insert(entry);
                    dirty = true;
                }
                Ok(Refresh::Unchanged(entry)) => {
                    report.unchanged.push(id);
                    next.insert(entry);
                }
                Err(e) => {
                    report.fail(&id, &e);
                    if let Some(old) = previous.get(&id) {
                        next.insert(old.clone());
                    }
                }
            }
        }

        if next.is_empty() && !report.failures.is_empty() {
            return Err(Error::NoUsableCollections {
                failed: report.failures.len(),
            });
        }

        // Files of unlisted collections go only once the pass is known to
        // produce an index; a file that cannot be deleted stays listed.
        for id in removed {
            tracing::info!(collection = %id, "Collection no longer listed, removing");
            match store.remove_payload(&id) {
                Ok(()) => {
                    report.removed.push(id);
                    dirty = true;
                }
                Err(e) => {
                    report.fail(&id, &e);
                    if let Some(old) = previous.get(&id) {
                        next.insert(old.clone());
                    }
                }
            }
        }

        if dirty {
            let mut entries = next.into_entries();
            for entry in &mut entries {
                entry.url = None;
            }
            store.write_index(&entries)?;
            report.index_written = true;
            tracing::info!(collections = entries.len(), "Wrote collection index");
        } else {
            tracing::info!("Collection index unchanged");
        }

        Ok(report)
    }

    /// Fetch one collection and persist it if its content changed.
    fn refresh(
        &self,
        entry: CollectionEntry,
        previous: Option<&CollectionEntry>,
        source: &mut dyn CatalogSource,
        store: &mut dyn CollectionStore,
    ) -> Result<Refresh> {
        tracing::debug!(collection = %entry.id, name = %entry.name, "Refreshing collection");

        let old_digest = match store.read_payload(&entry.id) {
            Ok(Some(payload)) => Some(payload_digest(&payload.items)?),
            Ok(None) => {
                tracing::debug!(collection = %entry.id, "No local copy yet");
                None
            }
            Err(e) => {
                tracing::warn!(collection = %entry.id, error = %e, "Local copy unreadable, replacing it");
                None
            }
        };

        let callback = self.settings.callback_name(&entry.id);
        let raw = source.fetch_collection(&entry, &callback)?;
        let records = extract_envelope(&raw, Some(&callback))?;
        let items = link_items(&records, &self.settings.proxy_hostname);
        let stats = LinkStats::of(&items);
        tracing::info!(
            collection = %entry.id,
            urls = stats.total,
            proxied = stats.proxied,
            "Fetched collection"
        );

        let new_digest = payload_digest(&items)?;
        if old_digest.as_deref() == Some(new_digest.as_str())
            && let Some(previous) = previous
        {
            tracing::debug!(collection = %entry.id, "Local copy is still current");
            return Ok(Refresh::Unchanged(previous.clone()));
        }
        if old_digest.is_some() {
            tracing::info!(collection = %entry.id, "Content changed, updating");
        }

        let payload = CollectionPayload {
            name: entry.name.clone(),
            id: entry.id.clone(),
            items,
        };
        store.write_payload(&payload)?;

        Ok(Refresh::Written(CollectionEntry {
            timestamp: Some((self.clock)()),
            ..entry
        }))
    }
}
