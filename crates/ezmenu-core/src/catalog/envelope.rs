//! Callback envelope extraction.
//!
//! The catalog answers collection queries with JSON wrapped in a function
//! call: `fromRemote000001234({ ... });`. Key order of the wrapped object is
//! preserved, since it determines the order of the menu links.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("Invalid identifier regex"));

/// Callback name requested for collection `id`.
pub fn callback_name(prefix: &str, id: &str) -> String {
    format!("{prefix}{id}")
}

/// Unwrap a callback envelope and parse the JSON inside.
///
/// With `expected_name` the envelope must start with exactly
/// `<expected_name>(`; without it any single-word function name is
/// accepted.
///
/// # Errors
///
/// [`Error::MalformedEnvelope`] if the trailing `);` or the
/// `<name>(` prologue is missing or the name does not match;
/// [`Error::Json`] if the wrapped content is not valid JSON.
///
/// # Example
/// ```
/// use ezmenu_core::extract_envelope;
///
/// let value = extract_envelope(r#"fromRemoteX({"a": 1});"#, Some("fromRemoteX")).unwrap();
/// assert_eq!(value["a"], 1);
/// ```
pub fn extract_envelope(data: &str, expected_name: Option<&str>) -> Result<Value> {
    let data = data.trim();
    let inner = data
        .strip_suffix(");")
        .ok_or_else(|| Error::malformed("envelope did not end with \");\""))?;

    let json = match expected_name {
        Some(name) => inner
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('('))
            .ok_or_else(|| {
                Error::malformed(format!("envelope did not start with \"{name}(\""))
            })?,
        None => {
            let open = inner.find('(').ok_or_else(|| {
                Error::malformed("envelope did not start with a function name and \"(\"")
            })?;
            let name = &inner[..open];
            if !IDENTIFIER_REGEX.is_match(name) {
                return Err(Error::malformed(format!(
                    "envelope started with unexpected function name \"{name}\""
                )));
            }
            &inner[open + 1..]
        }
    };

    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_name_concatenates() {
        assert_eq!(callback_name("fromRemote", "000001234"), "fromRemote000001234");
    }

    #[test]
    fn extracts_with_expected_name() {
        let value = extract_envelope("fromRemoteX({\"b\": 1, \"a\": 2});\n", Some("fromRemoteX")).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn extracts_without_expected_name() {
        let value = extract_envelope("getSets([1, 2]);", None).unwrap();
        assert_eq!(value, serde_json::json!([1, 2]));
    }

    #[test]
    fn missing_suffix_is_malformed() {
        let err = extract_envelope("fromRemoteX({})", Some("fromRemoteX")).unwrap_err();
        assert!(matches!(err, Error::MalformedEnvelope { .. }));
    }

    #[test]
    fn wrong_name_is_malformed() {
        let err = extract_envelope("fromRemoteY({});", Some("fromRemoteX")).unwrap_err();
        assert!(matches!(err, Error::MalformedEnvelope { reason } if reason.contains("fromRemoteX")));
    }

    #[test]
    fn missing_prologue_is_malformed() {
        assert!(matches!(
            extract_envelope("{});", None),
            Err(Error::MalformedEnvelope { .. })
        ));
        assert!(matches!(
            extract_envelope("alert 1({});", None),
            Err(Error::MalformedEnvelope { .. })
        ));
    }

    #[test]
    fn invalid_json_is_a_json_error() {
        let err = extract_envelope("fromRemoteX({oops});", Some("fromRemoteX")).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
