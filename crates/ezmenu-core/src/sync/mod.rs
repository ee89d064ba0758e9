//! Collection synchronisation
//!
//! This module provides:
//! - **engine**: one reconciliation pass between catalog and disk
//! - **source**: the catalog capability the engine fetches through
//! - **store**: where the index and collection files live
//! - **report**: what a pass did

mod engine;
mod report;
mod source;
mod store;

pub use engine::SyncEngine;
pub use report::{CollectionFailure, SyncReport};
pub use source::CatalogSource;
pub use store::{CollectionStore, DirectoryStore};
