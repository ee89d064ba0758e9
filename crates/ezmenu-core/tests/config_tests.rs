use ezmenu_core::{Error, Settings};
use ezmenu_fs::NormalizedPath;
use ezmenu_test_utils::TestWorkspace;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_missing_config_writes_default_and_fails() {
    let ws = TestWorkspace::new();
    let path = NormalizedPath::new(ws.path("ezmenu.toml"));

    let result = Settings::load_or_init(&path);

    assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    ws.assert_file_contains("ezmenu.toml", "proxy_hostname = \"go.coll.mpg.de\"");
    ws.assert_file_contains("ezmenu.toml", "# use_https:");

    // The written default loads back as the defaults.
    assert_eq!(Settings::load_or_init(&path).unwrap(), Settings::default());
}

#[test]
fn test_partial_config_keeps_defaults() {
    let ws = TestWorkspace::new();
    ws.write_file(
        "ezmenu.toml",
        "proxy_hostname = \"proxy.example.org\"\nproxy_login_port = \"2048\"\n",
    );

    let settings = Settings::load(&NormalizedPath::new(ws.path("ezmenu.toml"))).unwrap();

    assert_eq!(settings.proxy_hostname, "proxy.example.org");
    assert_eq!(settings.institute, "MBRG");
    assert_eq!(
        settings.collection_list_url(),
        "https://rena-mpdl-mpg-de.proxy.example.org:2048/rena/Ext/PredefinedSets?inst=MBRG"
    );
}

#[test]
fn test_default_json_config_has_no_comments() {
    let ws = TestWorkspace::new();
    let path = NormalizedPath::new(ws.path("ezmenu.json"));

    Settings::write_default(&path).unwrap();

    assert!(!ws.read_file("ezmenu.json").contains('#'));
    assert_eq!(Settings::load(&path).unwrap(), Settings::default());
}

#[rstest]
#[case("ezmenu.json", r#"{"institute": "MPIB"}"#)]
#[case("ezmenu.yaml", "institute: MPIB\n")]
fn test_other_formats_load(#[case] name: &str, #[case] content: &str) {
    let ws = TestWorkspace::new();
    ws.write_file(name, content);

    let settings = Settings::load(&NormalizedPath::new(ws.path(name))).unwrap();

    assert_eq!(settings.institute, "MPIB");
}

#[test]
fn test_invalid_login_port_is_rejected_on_load() {
    let ws = TestWorkspace::new();
    ws.write_file("ezmenu.toml", "proxy_login_port = \"http\"\n");

    let result = Settings::load(&NormalizedPath::new(ws.path("ezmenu.toml")));

    assert!(matches!(result, Err(Error::InvalidSetting { .. })));
}
