//! Menu injection for stanzas.
//!
//! The injected block is a fixed sequence of `Find`/`Replace` edit
//! directives. They track whether the proxy is inside `<head>` and outside
//! any `<script>` element, and replace the first such `</head>` with a
//! script include pointing at the injection target.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::record::Stanza;

/// First line of every injected block; also used to detect one.
const INJECTION_MARKER: &str = "Find <head";

static SCRIPT_SRC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<script [^>]*src="([^"]+)""#).expect("Invalid script src regex"));

/// The edit directives that inject a script reference to `target`.
///
/// # Example
/// ```
/// use ezmenu_stanza::injection_block;
///
/// let block = injection_block("https://proxy.example/menu.js");
/// assert_eq!(block.first().map(String::as_str), Some("Find <head"));
/// assert!(block.last().unwrap().contains("src=\"https://proxy.example/menu.js\""));
/// ```
pub fn injection_block(target: &str) -> Vec<String> {
    vec![
        INJECTION_MARKER.to_string(),
        "Replace -AddState=inHtml+notInScript <head".to_string(),
        "Find <script".to_string(),
        "Replace -RemoveState=notInScript <script".to_string(),
        "Find </script".to_string(),
        "Replace -AddState=notInScript </script".to_string(),
        "Find -State=inHtml+notInScript </head>".to_string(),
        format!(
            r#"Replace <script type="text/javascript" src="{target}" defer="defer"></script></head>"#
        ),
    ]
}

/// Cut an earlier injection block off the end of `body`.
///
/// Everything from the marker line on is removed. Returns the script
/// reference the removed block pointed at, if one could be found.
pub(crate) fn strip_injection(body: &mut Vec<String>) -> Option<String> {
    let start = body
        .iter()
        .position(|line| line.trim_start().starts_with(INJECTION_MARKER))?;
    let removed = body.split_off(start);
    removed.iter().rev().find_map(|line| {
        SCRIPT_SRC_REGEX
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

impl Stanza {
    /// Apply the injection block for `target`.
    ///
    /// Without a target the remembered default is used. Injecting again
    /// replaces the previous injection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInjectionTarget`] when neither `target` nor a
    /// remembered default is available.
    pub fn inject(&mut self, target: Option<&str>) -> Result<()> {
        let target = target
            .filter(|t| !t.trim().is_empty())
            .or(self.remembered_target.as_deref())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::MissingInjectionTarget {
                title: self.title.clone(),
            })?
            .trim()
            .to_string();
        self.injected_target = Some(target);
        Ok(())
    }

    /// Render the stanza in canonical form, followed by its injection
    /// block and a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InjectionNotYetApplied`] if [`Stanza::inject`] was
    /// not called first.
    pub fn render(&self) -> Result<String> {
        let target = self
            .injected_target
            .as_deref()
            .ok_or_else(|| Error::InjectionNotYetApplied {
                title: self.title.clone(),
            })?;

        let mut out = String::new();
        for line in &self.preamble {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("Title ");
        out.push_str(&self.title);
        out.push('\n');
        if let Some(mime) = &self.mime_directive {
            out.push_str(mime);
            out.push('\n');
        }
        out.push_str("URL ");
        out.push_str(&self.url);
        out.push('\n');
        for line in self.body.iter().cloned().chain(injection_block(target)) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        Ok(out)
    }
}
