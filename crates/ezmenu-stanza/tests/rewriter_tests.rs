//! Integration tests for menu injection.

use ezmenu_fs::NormalizedPath;
use ezmenu_stanza::{Error, StanzaParser, rewrite_document, rewrite_file};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const TARGET: &str = "https://go.example.org/loggedin/injectmenu.js";

const EXPECTED: &str = "\
# CORE
Title CORE
MimeFilter application/pdf .* javascript
URL http://core.coll.mpg.de/
DJ coll.mpg.de
Find <head
Replace -AddState=inHtml+notInScript <head
Find <script
Replace -RemoveState=notInScript <script
Find </script
Replace -AddState=notInScript </script
Find -State=inHtml+notInScript </head>
Replace <script type=\"text/javascript\" src=\"https://go.example.org/loggedin/injectmenu.js\" defer=\"defer\"></script></head>

";

#[test]
fn test_render_canonical_form() {
    let text = "# CORE\nurl http://core.coll.mpg.de/\nMimeFilter application/pdf .* javascript\ntitle CORE\nDJ coll.mpg.de\n";
    let mut stanza = StanzaParser::new(text).stanzas().next().unwrap();

    stanza.inject(Some(TARGET)).unwrap();

    assert_eq!(stanza.render().unwrap(), EXPECTED);
}

#[test]
fn test_injection_is_idempotent() {
    let text = "Title A\nURL http://a\nDJ a\n\nTitle B\nURL http://b\n";

    let once = rewrite_document(text, Some(TARGET));
    let twice = rewrite_document(&once.text, Some(TARGET));

    assert_eq!(once.stanzas, 2);
    assert_eq!(once.text, twice.text);
}

#[test]
fn test_reparse_of_output_keeps_fields() {
    let text = "# A\nTitle A\nURL http://a\nDJ a\nHJ www.a\n";
    let original: Vec<_> = StanzaParser::new(text).stanzas().collect();

    let rewritten = rewrite_document(text, Some(TARGET));
    let reparsed: Vec<_> = StanzaParser::new(&rewritten.text).stanzas().collect();

    assert_eq!(reparsed.len(), original.len());
    assert_eq!(reparsed[0].title(), original[0].title());
    assert_eq!(reparsed[0].url(), original[0].url());
    assert_eq!(reparsed[0].body(), original[0].body());
    assert_eq!(reparsed[0].remembered_target(), Some(TARGET));
}

#[test]
fn test_reinjection_replaces_target() {
    let first = rewrite_document("Title A\nURL http://a\n", Some("https://old.example/m.js"));
    let second = rewrite_document(&first.text, Some(TARGET));

    assert!(!second.text.contains("old.example"));
    assert_eq!(second.text.matches("Find <head").count(), 1);
}

#[test]
fn test_rewrite_without_target_uses_remembered_one() {
    let first = rewrite_document("Title A\nURL http://a\n\nTitle B\nURL http://b\n", Some(TARGET));

    let again = rewrite_document(&first.text, None);

    assert_eq!(again.text, first.text);
    assert!(again.skipped.is_empty());
}

#[test]
fn test_stanza_without_any_target_is_skipped() {
    let rewrite = rewrite_document("Title A\nURL http://a\n", None);

    assert_eq!(rewrite.stanzas, 0);
    assert_eq!(rewrite.skipped, vec!["A".to_string()]);
    assert!(rewrite.text.is_empty());
}

#[test]
fn test_render_error_names_stanza() {
    let stanza = StanzaParser::new("Title A\nURL http://a\n").stanzas().next().unwrap();
    let err = stanza.render().unwrap_err();

    assert!(matches!(err, Error::InjectionNotYetApplied { .. }));
    assert!(err.to_string().contains("\"A\""));
}

#[test]
fn test_rewrite_file_writes_target() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("eResources.txt");
    let target = temp.path().join("config/eResources.txt");
    fs::write(&source, "Title A\nURL http://a\nDJ a\n").unwrap();

    let rewrite = rewrite_file(
        &NormalizedPath::new(&source),
        &NormalizedPath::new(&target),
        Some(TARGET),
    )
    .unwrap();

    assert_eq!(rewrite.stanzas, 1);
    assert_eq!(fs::read_to_string(&target).unwrap(), rewrite.text);
}

#[test]
fn test_rewrite_file_missing_source() {
    let temp = TempDir::new().unwrap();
    let result = rewrite_file(
        &NormalizedPath::new(temp.path().join("missing.txt")),
        &NormalizedPath::new(temp.path().join("out.txt")),
        Some(TARGET),
    );

    assert!(matches!(result, Err(Error::Fs(_))));
    assert!(!temp.path().join("out.txt").exists());
}
