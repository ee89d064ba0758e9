//! Whole-document rewriting.

use ezmenu_fs::{NormalizedPath, io};

use crate::error::Result;
use crate::parser::StanzaParser;

/// Outcome of rewriting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten document.
    pub text: String,
    /// Number of stanzas written out with an injection.
    pub stanzas: usize,
    /// Titles of stanzas that could not be injected and were left out.
    pub skipped: Vec<String>,
}

/// Inject `target` into every stanza of `text`.
///
/// Lines outside any stanza are not carried over. A stanza that fails to
/// inject is logged and skipped; the rest of the document is still
/// rewritten.
pub fn rewrite_document(text: &str, target: Option<&str>) -> Rewrite {
    let mut rewrite = Rewrite::default();
    for mut stanza in StanzaParser::new(text).stanzas() {
        match stanza.inject(target).and_then(|()| stanza.render()) {
            Ok(rendered) => {
                rewrite.text.push_str(&rendered);
                rewrite.stanzas += 1;
            }
            Err(e) => {
                tracing::warn!(title = stanza.title(), error = %e, "Stanza skipped");
                rewrite.skipped.push(stanza.title().to_string());
            }
        }
    }
    rewrite
}

/// Rewrite the stanza file at `source` into `target_path`.
///
/// The output is written atomically, so the proxy never sees a half
/// written configuration.
pub fn rewrite_file(
    source: &NormalizedPath,
    target_path: &NormalizedPath,
    injection: Option<&str>,
) -> Result<Rewrite> {
    let text = io::read_text(source)?;
    let rewrite = rewrite_document(&text, injection);
    io::write_text(target_path, &rewrite.text)?;
    tracing::info!(
        source = %source,
        target = %target_path,
        stanzas = rewrite.stanzas,
        skipped = rewrite.skipped.len(),
        "Rewrote stanza file"
    );
    Ok(rewrite)
}
