//! Shared test utilities for the ezmenu workspace.
//!
//! Dev-dependency only, never published. Fixtures are plain text and JSON
//! so that any crate can use them without depending on the crates under
//! test.
//!
//! # Modules
//!
//! - [`catalog`]: catalog records, collection lists and callback envelopes
//! - [`stanza`]: sample stanza documents
//! - [`workspace`]: [`TestWorkspace`] temporary directory with assertions

pub mod catalog;
pub mod stanza;
pub mod workspace;

pub use workspace::TestWorkspace;
