//! Sync pass reporting.

use serde::{Deserialize, Serialize};

/// A collection whose refresh failed during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionFailure {
    pub id: String,
    pub message: String,
}

/// Report from a sync pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Collections whose file was (re)written.
    pub updated: Vec<String>,
    /// Collections whose content had not changed.
    pub unchanged: Vec<String>,
    /// Collections removed because the catalog no longer lists them.
    pub removed: Vec<String>,
    /// Collections that could not be refreshed; prior data was kept.
    pub failures: Vec<CollectionFailure>,
    /// The catalog list was unavailable and the on-disk index was used.
    pub used_fallback: bool,
    /// Whether the index file was written.
    pub index_written: bool,
    /// Non-fatal problems outside individual collections.
    pub errors: Vec<String>,
}

impl SyncReport {
    /// Whether the pass completed without any failure.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.errors.is_empty()
    }

    pub(crate) fn fail(&mut self, id: &str, error: &crate::Error) {
        tracing::warn!(collection = id, error = %error, "Collection not refreshed");
        self.failures.push(CollectionFailure {
            id: id.to_string(),
            message: error.to_string(),
        });
    }
}
