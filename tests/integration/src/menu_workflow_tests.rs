//! End-to-end tests over the shared fixtures
//!
//! Exercises both halves of a deployment: rewriting a real-looking stanza
//! file for the proxy, then synchronizing the menu collections from a
//! recorded catalog.

use std::path::PathBuf;

use ezmenu_core::{
    CatalogSource, CollectionEntry, DirectoryStore, Error, RemoteCollection, Result, Settings,
    SyncEngine,
};
use ezmenu_fs::{NormalizedPath, io};
use ezmenu_stanza::{StanzaParser, rewrite_file};
use ezmenu_test_utils::TestWorkspace;
use pretty_assertions::assert_eq;
use serde_json::json;

const SCRIPT_URL: &str = "https://go.coll.mpg.de/loggedin/injectmenu.js";

fn fixture(path: &str) -> NormalizedPath {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures");
    NormalizedPath::new(root.join(path))
}

/// Catalog replaying the recorded responses under `test-fixtures/catalog`.
struct RecordedCatalog {
    dir: NormalizedPath,
    offline: bool,
}

impl RecordedCatalog {
    fn new() -> Self {
        Self {
            dir: fixture("catalog"),
            offline: false,
        }
    }
}

impl CatalogSource for RecordedCatalog {
    fn fetch_collection_list(&mut self) -> Result<Vec<RemoteCollection>> {
        if self.offline {
            return Err(Error::transport("collection list", "offline"));
        }
        let text = io::read_text(&self.dir.join("collections.json"))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn fetch_collection(&mut self, entry: &CollectionEntry, callback: &str) -> Result<String> {
        io::read_text(&self.dir.join(&format!("{callback}.jsonp")))
            .map_err(|e| Error::transport(&entry.id, e.to_string()))
    }
}

// ============================================================================
// Stanza file
// ============================================================================

#[test]
fn test_fixture_stanza_file_is_injected() {
    let ws = TestWorkspace::new();
    let target = NormalizedPath::new(ws.path("ezproxy/eResources.txt"));

    let rewrite = rewrite_file(&fixture("eresources/eResources.txt"), &target, Some(SCRIPT_URL)).unwrap();

    assert_eq!(rewrite.stanzas, 6);
    assert!(rewrite.skipped.is_empty());

    let text = io::read_text(&target).unwrap();
    let titles: Vec<String> = StanzaParser::new(&text)
        .stanzas()
        .map(|s| s.title().to_string())
        .collect();
    assert_eq!(
        titles,
        vec![
            "American Chemical Society",
            "Annual Reviews",
            "arXiv",
            "JSTOR",
            "Nature",
            "Springer Link",
        ]
    );
    assert_eq!(text.matches("Find <head").count(), 6);
    assert!(text.contains("Title Annual Reviews\nMimeFilter application/pdf .* javascript\nURL https://www.annualreviews.org/\n"));
    assert!(text.starts_with("# Databases licensed for all institutes\nOption Cookie\nTitle American Chemical Society\n"));
}

#[test]
fn test_rewritten_stanza_file_is_stable() {
    let ws = TestWorkspace::new();
    let once = NormalizedPath::new(ws.path("once.txt"));
    let twice = NormalizedPath::new(ws.path("twice.txt"));

    rewrite_file(&fixture("eresources/eResources.txt"), &once, Some(SCRIPT_URL)).unwrap();
    // The second pass relies on the targets remembered from the first.
    let rewrite = rewrite_file(&once, &twice, None).unwrap();

    assert_eq!(rewrite.stanzas, 6);
    assert_eq!(io::read_text(&twice).unwrap(), io::read_text(&once).unwrap());
}

#[test]
fn test_only_previously_injected_stanzas_survive_without_target() {
    let ws = TestWorkspace::new();
    let target = NormalizedPath::new(ws.path("out.txt"));

    let rewrite = rewrite_file(&fixture("eresources/eResources.txt"), &target, None).unwrap();

    assert_eq!(rewrite.stanzas, 1);
    assert_eq!(rewrite.skipped.len(), 5);
    ws.assert_file_contains("out.txt", "Title JSTOR");
}

// ============================================================================
// Collection sync
// ============================================================================

#[test]
fn test_recorded_catalog_sync() {
    let ws = TestWorkspace::new();
    let mut store = DirectoryStore::new(NormalizedPath::new(ws.root()));

    let report = SyncEngine::new(Settings::default())
        .with_clock(|| 1_700_000_000)
        .run(&mut RecordedCatalog::new(), &mut store)
        .unwrap();

    assert!(report.is_clean());
    assert_eq!(report.updated, vec!["000001", "000002", "Everything"]);

    assert_eq!(
        ws.read_json("000001.json"),
        json!({
            "name": "Chemistry",
            "id": "000001",
            "data": [
                {
                    "title": "American Chemical Society",
                    "url": "https://pubs-acs-org.go.coll.mpg.de/",
                    "proxied": true,
                    "free": false,
                    "desc": "Journals of the ACS"
                },
                {
                    "title": "Reaxys",
                    "url": "https://www-reaxys-com.go.coll.mpg.de/",
                    "proxied": true,
                    "free": false
                }
            ]
        })
    );
    assert_eq!(ws.read_json("000002.json")["data"].as_array().unwrap().len(), 2);
    assert_eq!(ws.read_json("Everything.json")["data"], json!([]));
    assert_eq!(
        ws.read_json("setlist.json"),
        json!([
            {"id": "000001", "name": "Chemistry", "timestamp": "1700000000", "logo": "one"},
            {"id": "000002", "name": "Open Access", "timestamp": "1700000000", "logo": "one"},
            {"id": "Everything", "name": "Everything", "timestamp": "1700000000", "logo": "two"}
        ])
    );
}

#[test]
fn test_offline_rerun_serves_existing_menu() {
    let ws = TestWorkspace::new();
    let mut store = DirectoryStore::new(NormalizedPath::new(ws.root()));
    SyncEngine::new(Settings::default())
        .with_clock(|| 1_700_000_000)
        .run(&mut RecordedCatalog::new(), &mut store)
        .unwrap();
    let index = ws.read_file("setlist.json");

    let mut catalog = RecordedCatalog {
        offline: true,
        ..RecordedCatalog::new()
    };
    let report = SyncEngine::new(Settings::default())
        .with_clock(|| 1_800_000_000)
        .run(&mut catalog, &mut store)
        .unwrap();

    assert!(report.used_fallback);
    assert_eq!(report.unchanged.len(), 3);
    assert!(!report.index_written);
    assert_eq!(ws.read_file("setlist.json"), index);
}
