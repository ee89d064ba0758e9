//! The stanza record produced by the parser.

/// One database stanza.
///
/// Holds the raw lines around the `Title`/`URL` pair verbatim so that
/// rendering preserves everything the parser does not interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza {
    pub(crate) preamble: Vec<String>,
    pub(crate) title: String,
    pub(crate) mime_directive: Option<String>,
    pub(crate) url: String,
    pub(crate) body: Vec<String>,
    /// Script reference found in a stripped earlier injection.
    pub(crate) remembered_target: Option<String>,
    /// Script reference of the injection applied to this record.
    pub(crate) injected_target: Option<String>,
}

impl Stanza {
    /// Build a stanza from its parts. `title` and `url` are trimmed.
    pub fn new(
        preamble: Vec<String>,
        title: impl Into<String>,
        mime_directive: Option<String>,
        url: impl Into<String>,
        body: Vec<String>,
    ) -> Self {
        Self {
            preamble,
            title: title.into().trim().to_string(),
            mime_directive,
            url: url.into().trim().to_string(),
            body,
            remembered_target: None,
            injected_target: None,
        }
    }

    /// Comment and directive lines preceding the `Title`/`URL` pair.
    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// A `MimeFilter` line found between `Title` and `URL`.
    pub fn mime_directive(&self) -> Option<&str> {
        self.mime_directive.as_deref()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Lines after the `Title`/`URL` pair, without any earlier injection.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Script reference recovered from an injection block that was
    /// stripped during parsing.
    pub fn remembered_target(&self) -> Option<&str> {
        self.remembered_target.as_deref()
    }

    /// Use `target` when [`Stanza::inject`] is called without one.
    pub fn with_default_target(mut self, target: impl Into<String>) -> Self {
        self.remembered_target = Some(target.into());
        self
    }

    /// Whether [`Stanza::inject`] has been applied.
    pub fn is_injected(&self) -> bool {
        self.injected_target.is_some()
    }
}
