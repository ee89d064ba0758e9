//! Catalog response handling.
//!
//! - **envelope**: unwrap `<callback>( ... );` responses
//! - **filter**: turn catalog records into menu links

mod envelope;
mod filter;

pub use envelope::{callback_name, extract_envelope};
pub use filter::{LinkStats, link_items};
