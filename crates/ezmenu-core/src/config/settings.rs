//! Runtime settings and their on-disk form.

use serde::{Deserialize, Serialize};
use url::Url;

use ezmenu_fs::{ConfigStore, NormalizedPath};

use crate::error::{Error, Result};
use crate::model::CollectionEntry;

/// Id and name of the implicit collection spanning the whole catalog.
pub const EVERYTHING_ID: &str = "Everything";

const EVERYTHING_LOGO: &str = "two";
const EVERYTHING_QUERY: &str = "Search/Results?lookfor=&type=AllFields";

const CONFIG_HELP: &str = "\
proxy_hostname: hostname of your proxy installation
proxy_login_port: for a virtual port setup, the port to connect to from localhost
use_https: whether to connect to the proxy via HTTPS
institute: your institute's shorthand in the catalog's predefined sets
output_dir: where to put the JSON files with menu data
injection_url: script the proxy injects into every proxied page
eresources_source: stanza file to read (e.g. a version-controlled checkout)
eresources_target: where the proxy reads its rewritten stanza file from
callback_prefix: function name prefix requested for collection envelopes";

/// Settings for one ezmenu installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub institute: String,
    pub proxy_hostname: String,
    /// Port for logging in from localhost; empty when not used.
    pub proxy_login_port: String,
    pub use_https: bool,
    pub output_dir: String,
    pub injection_url: String,
    pub eresources_source: String,
    pub eresources_target: String,
    pub callback_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            institute: "MBRG".to_string(),
            proxy_hostname: "go.coll.mpg.de".to_string(),
            proxy_login_port: String::new(),
            use_https: true,
            output_dir: "../src/js/loggedin/".to_string(),
            injection_url: "https://go.coll.mpg.de/loggedin/injectmenu.js".to_string(),
            eresources_source: "~/ez_mpdl/trunk/config/eResources.txt".to_string(),
            eresources_target: "/usr/local/ezproxy/config/eResources.txt".to_string(),
            callback_prefix: "fromRemote".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let settings: Settings = ConfigStore::new().load(path)?;
        settings.login_port_number()?;
        Ok(settings)
    }

    /// Load settings, or write a commented default file and fail with
    /// [`Error::ConfigNotFound`] if there is none yet.
    pub fn load_or_init(path: &NormalizedPath) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }
        Self::write_default(path)?;
        Err(Error::ConfigNotFound {
            path: path.to_native(),
        })
    }

    /// Write the default settings plus a short description of each field.
    pub fn write_default(path: &NormalizedPath) -> Result<()> {
        ConfigStore::new().save(path, &Settings::default(), Some(CONFIG_HELP))?;
        tracing::info!(path = %path, "Wrote default configuration");
        Ok(())
    }

    /// The login port as `:<port>`, or empty.
    pub fn login_port(&self) -> String {
        let port = self.proxy_login_port.trim().trim_start_matches(':');
        if port.is_empty() {
            String::new()
        } else {
            format!(":{port}")
        }
    }

    /// The login port as a number, if one is configured.
    pub fn login_port_number(&self) -> Result<Option<u16>> {
        let port = self.proxy_login_port.trim().trim_start_matches(':');
        if port.is_empty() {
            return Ok(None);
        }
        port.parse().map(Some).map_err(|_| Error::InvalidSetting {
            name: "proxy_login_port".to_string(),
            reason: format!("{port:?} is not a port number"),
        })
    }

    /// Base URL of the catalog as reached through the proxy.
    pub fn catalog_base_url(&self) -> String {
        if self.use_https {
            format!(
                "https://rena-mpdl-mpg-de.{}{}/rena/",
                self.proxy_hostname,
                self.login_port()
            )
        } else {
            format!(
                "http://rena.mpdl.mpg.de.{}{}/rena/",
                self.proxy_hostname,
                self.login_port()
            )
        }
    }

    /// URL of the catalog's collection list for this institute.
    pub fn collection_list_url(&self) -> String {
        format!("{}Ext/PredefinedSets?inst={}", self.catalog_base_url(), self.institute)
    }

    /// The implicit collection that spans the whole catalog.
    pub fn everything_entry(&self) -> CollectionEntry {
        CollectionEntry {
            id: EVERYTHING_ID.to_string(),
            name: EVERYTHING_ID.to_string(),
            url: Some(format!("{}{}", self.catalog_base_url(), EVERYTHING_QUERY)),
            timestamp: None,
            logo: Some(EVERYTHING_LOGO.to_string()),
        }
    }

    /// Callback name requested for collection `id`.
    pub fn callback_name(&self, id: &str) -> String {
        crate::catalog::callback_name(&self.callback_prefix, id)
    }

    /// Point a catalog URL at the configured login port.
    ///
    /// URLs are returned unchanged when no login port is configured.
    pub fn rewrite_collection_url(&self, raw: &str) -> Result<String> {
        let Some(port) = self.login_port_number()? else {
            return Ok(raw.to_string());
        };
        let mut url = Url::parse(raw).map_err(|e| Error::InvalidCatalogUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        url.set_port(Some(port)).map_err(|()| Error::InvalidCatalogUrl {
            url: raw.to_string(),
            reason: "URL cannot carry a port".to_string(),
        })?;
        Ok(url.to_string())
    }
}
