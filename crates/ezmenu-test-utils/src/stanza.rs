//! Sample stanza documents.

/// Script URL used by injection fixtures.
pub const SCRIPT_URL: &str = "https://proxy.example.org/loggedin/injectmenu.js";

/// Two plain stanzas, one of them with a misplaced `MimeFilter` line.
pub const TWO_STANZAS: &str = "\
# JSTOR
Option Cookie
Title JSTOR
URL https://www.jstor.org/
Domain jstor.org
HJ www.jstor.org

Title Nature
MimeFilter application/pdf .* javascript
URL https://www.nature.com/
DJ nature.com
";

/// A URL-first stanza with directives before it.
pub const URL_FIRST: &str = "\
HTTPHeader -request X-Forwarded-For
URL https://arxiv.org/
Title arXiv
Domain arxiv.org
";

/// A single stanza carrying an injection block for [`SCRIPT_URL`].
pub fn injected_stanza() -> String {
    format!(
        "\
Title JSTOR
URL https://www.jstor.org/
Domain jstor.org
Find <head
Replace -AddState=inHtml+notInScript <head
Find <script
Replace -RemoveState=notInScript <script
Find </script
Replace -AddState=notInScript </script
Find -State=inHtml+notInScript </head>
Replace <script type=\"text/javascript\" src=\"{SCRIPT_URL}\" defer=\"defer\"></script></head>

"
    )
}
