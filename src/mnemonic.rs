//! Mnemonic marker stylizing for menu label text
//!
//! Menu toolkits mark the keyboard accelerator of a label by prefixing it
//! with an ampersand ("&File" underlines the F). Label text is HTML-escaped
//! before it reaches the renderer, so the marker arrives spelled `&amp;`.
//! Scanning the raw text instead would mangle escaped entities, turning
//! `&lt;` into `<u>l</u>t;`, which is why the scan runs on the escaped form.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

// One escaped ampersand followed by either another escaped ampersand or any
// single other character.
static MNEMONIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&amp;(&amp;|.)").expect("invalid mnemonic pattern"));

/// Wrap the accelerator character of an HTML-escaped label in `<u>` tags.
///
/// `text` must already be HTML-escaped (see `HtmlEscape::escape`): every
/// literal `&` of the original label is expected to be spelled `&amp;`.
///
/// A doubled ampersand in the original label (`&&`) collapses to a single
/// literal ampersand and underlines nothing, matching the Qt accelerator
/// convention. A lone trailing `&amp;` has no accelerator character to
/// capture and passes through unchanged.
///
/// # Examples
///
/// ```
/// use menutext::stylize_mnemonics;
///
/// assert_eq!(stylize_mnemonics("&amp;File"), "<u>F</u>ile");
/// assert_eq!(stylize_mnemonics("&amp;&amp;Save"), "&amp;Save");
/// ```
pub fn stylize_mnemonics(text: &str) -> String {
    MNEMONIC
        .replace_all(text, |caps: &regex::Captures| {
            let following = &caps[1];
            if following == "&amp;" {
                // Literal double ampersand: drop the marker, keep the
                // escaped ampersand as plain text
                following.to_string()
            } else {
                debug!("Underlining accelerator {:?}", following);
                format!("<u>{following}</u>")
            }
        })
        .into_owned()
}
