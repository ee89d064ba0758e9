//! Proxy database stanza parsing and menu injection.
//!
//! The proxy configuration format is line oriented. A database stanza is
//! anchored on a `Title`/`URL` pair:
//!
//! ```text
//! # optional comments and a few directives (Option, MimeFilter, ...)
//! Title Some Database
//! URL https://www.example.com/
//! Domain example.com
//! ```
//!
//! [`StanzaParser`] recognizes stanzas in a document, [`Stanza::inject`]
//! appends the edit directives that make the proxy insert the menu script
//! into every proxied HTML page, and [`rewrite_document`] /
//! [`rewrite_file`] do both for a whole file.
//!
//! Injection is idempotent: a previously injected block is stripped when a
//! stanza is parsed, so rewriting an already rewritten file yields the same
//! output.

pub mod document;
pub mod error;
pub mod parser;
pub mod record;
pub mod rewriter;

pub use document::{Rewrite, rewrite_document, rewrite_file};
pub use error::{Error, Result};
pub use parser::{StanzaParser, Stanzas};
pub use record::Stanza;
pub use rewriter::injection_block;
