//! Catalog record filtering.
//!
//! A catalog record becomes a menu link only if it has a non-empty
//! `title`, an `access_txtF` field and a non-null first entry in
//! `naturl_str_mv`. Records are visited in the order the catalog sent them.

use serde_json::Value;

use crate::model::LinkItem;

const TITLE: &str = "title";
const ACCESS: &str = "access_txtF";
const URLS: &str = "naturl_str_mv";
const DESCRIPTION: &str = "description";
const FREE_ACCESS: &str = "FREE";

/// Link counts for one collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub total: usize,
    pub proxied: usize,
}

impl LinkStats {
    pub fn of(items: &[LinkItem]) -> Self {
        Self {
            total: items.len(),
            proxied: items.iter().filter(|item| item.proxied).count(),
        }
    }
}

/// Convert catalog records into menu links.
///
/// `records` is the unwrapped catalog response: an object of records keyed
/// by record id (or, leniently, an array of records). A link is `proxied`
/// when `proxy_hostname` occurs in its URL and `free` when its access field
/// is `FREE`.
pub fn link_items(records: &Value, proxy_hostname: &str) -> Vec<LinkItem> {
    let records: Box<dyn Iterator<Item = &Value> + '_> = match records {
        Value::Object(map) => Box::new(map.values()),
        Value::Array(list) => Box::new(list.iter()),
        _ => Box::new(std::iter::empty()),
    };

    records
        .filter_map(|record| link_item(record, proxy_hostname))
        .inspect(|item| {
            if !item.proxied && !item.free {
                tracing::warn!(title = %item.title, url = %item.url, "Link is neither proxied nor free");
            }
        })
        .collect()
}

fn link_item(record: &Value, proxy_hostname: &str) -> Option<LinkItem> {
    let title = first_string(record.get(TITLE)?)?;
    if title.is_empty() {
        return None;
    }
    let access = record.get(ACCESS)?;
    let url = first_string(record.get(URLS)?.as_array()?.first()?)?;

    Some(LinkItem {
        title: title.to_string(),
        url: url.to_string(),
        proxied: !proxy_hostname.is_empty() && url.contains(proxy_hostname),
        free: access.as_str() == Some(FREE_ACCESS),
        description: record.get(DESCRIPTION).and_then(first_string).map(str::to_string),
    })
}

/// A string, or the first element of an array of strings.
fn first_string(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s),
        Value::Array(list) => list.first().and_then(Value::as_str),
        _ => None,
    }
}
