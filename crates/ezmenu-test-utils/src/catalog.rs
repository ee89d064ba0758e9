//! Catalog fixtures.
//!
//! The catalog answers with JSON wrapped in a function call; these helpers
//! build both the JSON and the wrapped form.

use serde_json::{Map, Value, json};

/// Access value of freely available records.
pub const FREE: &str = "FREE";

/// Access value of licensed records.
pub const LICENSED: &str = "LICENSED";

/// A catalog record as returned inside a collection envelope.
pub fn record(title: &str, url: &str, access: &str) -> Value {
    json!({
        "title": title,
        "naturl_str_mv": [url],
        "access_txtF": access,
    })
}

/// A record with a description.
pub fn described_record(title: &str, url: &str, access: &str, description: &str) -> Value {
    let mut value = record(title, url, access);
    value["description"] = Value::String(description.to_string());
    value
}

/// Records keyed by a generated record id, in the given order.
pub fn records(records: impl IntoIterator<Item = Value>) -> Value {
    let map: Map<String, Value> = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| (format!("rec{:04}", i + 1), record))
        .collect();
    Value::Object(map)
}

/// One entry of the catalog's collection list.
pub fn collection(id: &str, name: &str, url: &str) -> Value {
    json!({"id": id, "name": name, "url": url})
}

/// A collection list in catalog order.
pub fn collection_list(collections: &[(&str, &str, &str)]) -> Value {
    Value::Array(
        collections
            .iter()
            .map(|(id, name, url)| collection(id, name, url))
            .collect(),
    )
}

/// Wrap `value` in a `<callback>(...);` envelope.
pub fn envelope(callback: &str, value: &Value) -> String {
    format!("{callback}({value});")
}
