//! Stanza recognition.
//!
//! A stanza starts with a `Title` line and a `URL` line in either order,
//! optionally with one `MimeFilter` line between them. Comment lines and a
//! short list of directives directly above the pair form the preamble. The
//! body is every following non-blank line up to the next `Title` or `URL`
//! line; blank lines after the body are consumed.
//!
//! Lines that cannot be attached to any stanza are skipped.

use crate::record::Stanza;
use crate::rewriter::strip_injection;

/// Directives allowed to precede the `Title`/`URL` pair (matched
/// case-insensitively at the start of the line).
const PREAMBLE_KEYWORDS: &[&str] = &[
    "#",
    "option",
    "proxyhostnameedit",
    "mimefilter",
    "neverproxy",
    "anonymousurl",
    "httpheader",
    "cookie",
];

const MIME_KEYWORD: &str = "mimefilter";

/// Parses stanzas out of a configuration document.
///
/// # Example
/// ```
/// use ezmenu_stanza::StanzaParser;
///
/// let text = "# Example\nTitle Example DB\nURL https://db.example.com\nDomain example.com\n";
/// let stanzas: Vec<_> = StanzaParser::new(text).stanzas().collect();
/// assert_eq!(stanzas.len(), 1);
/// assert_eq!(stanzas[0].title(), "Example DB");
/// assert_eq!(stanzas[0].body(), ["Domain example.com"]);
/// ```
#[derive(Debug, Clone)]
pub struct StanzaParser<'a> {
    lines: Vec<&'a str>,
}

impl<'a> StanzaParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
        }
    }

    /// Iterate over the stanzas of the document, starting from the top.
    pub fn stanzas(&self) -> Stanzas<'_, 'a> {
        Stanzas {
            lines: &self.lines,
            pos: 0,
        }
    }
}

/// Lazy iterator over the stanzas of a document.
#[derive(Debug)]
pub struct Stanzas<'p, 'a> {
    lines: &'p [&'a str],
    pos: usize,
}

impl Iterator for Stanzas<'_, '_> {
    type Item = Stanza;

    fn next(&mut self) -> Option<Stanza> {
        while self.pos < self.lines.len() {
            if let Some((stanza, next)) = match_at(self.lines, self.pos) {
                self.pos = next;
                return Some(stanza);
            }
            let skipped = self.lines[self.pos];
            if !is_blank(skipped) {
                tracing::debug!(line = self.pos + 1, text = skipped, "Line outside any stanza skipped");
            }
            self.pos += 1;
        }
        None
    }
}

/// Try to match a stanza whose preamble starts at `start`.
///
/// Returns the stanza and the index of the first line after it.
fn match_at(lines: &[&str], start: usize) -> Option<(Stanza, usize)> {
    let mut header_at = start;
    let header = loop {
        let line = *lines.get(header_at)?;
        if let Some(header) = match_header(lines, header_at) {
            break header;
        }
        if !is_preamble_line(line) {
            return None;
        }
        header_at += 1;
    };

    let mut pos = header.end;
    let mut body = Vec::new();
    while let Some(line) = lines.get(pos) {
        if is_blank(line) || is_boundary(line) {
            break;
        }
        body.push((*line).to_string());
        pos += 1;
    }
    while lines.get(pos).is_some_and(|line| is_blank(line)) {
        pos += 1;
    }

    let remembered_target = strip_injection(&mut body);
    let mut stanza = Stanza::new(
        lines[start..header_at].iter().map(|l| (*l).to_string()).collect(),
        header.title,
        header.mime_directive.map(str::to_string),
        header.url,
        body,
    );
    stanza.remembered_target = remembered_target;
    Some((stanza, pos))
}

struct Header<'a> {
    title: &'a str,
    mime_directive: Option<&'a str>,
    url: &'a str,
    end: usize,
}

/// Match a `Title`/`URL` pair at `at`, trying title-first before url-first.
fn match_header<'a>(lines: &[&'a str], at: usize) -> Option<Header<'a>> {
    let first = *lines.get(at)?;

    if let Some(title) = keyword_value(first, "title") {
        let (mime_directive, url_at) = misplaced_mime(lines, at + 1, "url");
        if let Some(url) = lines.get(url_at).copied().and_then(|l| keyword_value(l, "url")) {
            return Some(Header {
                title,
                mime_directive,
                url,
                end: url_at + 1,
            });
        }
    }

    if let Some(url) = keyword_value(first, "url") {
        let (mime_directive, title_at) = misplaced_mime(lines, at + 1, "title");
        if let Some(title) = lines.get(title_at).copied().and_then(|l| keyword_value(l, "title")) {
            return Some(Header {
                title,
                mime_directive,
                url,
                end: title_at + 1,
            });
        }
    }

    None
}

/// A `MimeFilter` line at `at` is taken only if the expected keyword
/// follows it.
fn misplaced_mime<'a>(lines: &[&'a str], at: usize, expected: &str) -> (Option<&'a str>, usize) {
    match (lines.get(at), lines.get(at + 1)) {
        (Some(mime), Some(next))
            if starts_with_ignore_case(mime, MIME_KEYWORD)
                && keyword_value(next, expected).is_some() =>
        {
            (Some(*mime), at + 1)
        }
        _ => (None, at),
    }
}

/// The trimmed value of a `<keyword> <value>` line, if non-empty.
fn keyword_value<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    if !starts_with_ignore_case(line, keyword) {
        return None;
    }
    let rest = &line[keyword.len()..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let value = rest.trim();
    (!value.is_empty()).then_some(value)
}

fn is_boundary(line: &str) -> bool {
    keyword_value(line, "title").is_some() || keyword_value(line, "url").is_some()
}

fn is_preamble_line(line: &str) -> bool {
    PREAMBLE_KEYWORDS
        .iter()
        .any(|keyword| starts_with_ignore_case(line, keyword))
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.len() >= prefix.len()
        && line.is_char_boundary(prefix.len())
        && line[..prefix.len()].eq_ignore_ascii_case(prefix)
}
