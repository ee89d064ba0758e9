//! Collection synchronisation for ezmenu
//!
//! Keeps the menu's collection files in step with the remote catalog:
//!
//! - **Model**: collection entries, the collection index and payloads
//! - **Catalog**: callback envelope extraction and link filtering
//! - **Digest**: content fingerprints for change detection
//! - **SyncEngine**: one reconciliation pass between the remote catalog and
//!   the files on disk
//! - **Settings**: the explicit configuration value threaded through all of
//!   the above
//!
//! Transport and persistence are capabilities ([`CatalogSource`],
//! [`CollectionStore`]) so the engine itself does no I/O of its own.

pub mod catalog;
pub mod config;
pub mod digest;
pub mod error;
pub mod model;
pub mod sync;

pub use catalog::{LinkStats, callback_name, extract_envelope, link_items};
pub use config::{EVERYTHING_ID, Settings};
pub use digest::{digest, payload_digest};
pub use error::{Error, Result};
pub use model::{CollectionEntry, CollectionIndex, CollectionPayload, LinkItem, RemoteCollection};
pub use sync::{
    CatalogSource, CollectionFailure, CollectionStore, DirectoryStore, SyncEngine, SyncReport,
};
