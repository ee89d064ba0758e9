//! Configuration for ezmenu
//!
//! [`Settings`] is loaded once and passed explicitly to the sync engine and
//! the stanza rewriter. Derived values such as the catalog base URL and the
//! implicit catalog-wide collection are computed from it on demand.

mod settings;

pub use settings::{EVERYTHING_ID, Settings};
