//! HTML escaping for menu label text

use std::sync::LazyLock;

use regex::Regex;

static MARKUP_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[&<>]").expect("invalid markup pattern"));

/// HTML escaping utilities
pub struct HtmlEscape;

impl HtmlEscape {
    /// Escape label text for embedding in HTML, like `QString::toHtmlEscaped`.
    /// Escapes: &, <, >
    ///
    /// Runs as a single left-to-right pass, so a produced `&amp;` is never
    /// re-escaped. Not idempotent: escaping twice double-escapes, so callers
    /// escape exactly once per render cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use menutext::HtmlEscape;
    ///
    /// assert_eq!(HtmlEscape::escape("a&b<c>d"), "a&amp;b&lt;c&gt;d");
    /// ```
    pub fn escape(text: &str) -> String {
        MARKUP_CHARS
            .replace_all(text, |caps: &regex::Captures| {
                let tag = &caps[0];
                match tag {
                    "&" => "&amp;".to_string(),
                    "<" => "&lt;".to_string(),
                    ">" => "&gt;".to_string(),
                    // Unreachable with the three-character pattern above,
                    // kept so unmapped matches pass through unchanged.
                    _ => tag.to_string(),
                }
            })
            .into_owned()
    }
}
