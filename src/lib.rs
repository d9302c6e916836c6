//! Label text transformations for HTML-rendered menus
//!
//! Menu titles are rendered as HTML, but toolkit labels are plain text
//! carrying an accelerator convention: `&File` underlines the F, `&&`
//! is a literal ampersand. This crate provides the two transformations
//! the renderer needs, applied in order:
//!
//! 1. [`HtmlEscape::escape`] makes the plain text safe to embed in HTML.
//! 2. [`stylize_mnemonics`] turns the (now escaped) accelerator markers
//!    into `<u>` underline markup.
//!
//! ```
//! use menutext::{stylize_mnemonics, HtmlEscape};
//!
//! let label = stylize_mnemonics(&HtmlEscape::escape("&Save <as>"));
//! assert_eq!(label, "<u>S</u>ave &lt;as&gt;");
//! ```
//!
//! Escaping must happen exactly once per render cycle; the stylizer assumes
//! its input is already escaped and is not usable on raw label text.

pub mod html;
pub mod mnemonic;

pub use html::HtmlEscape;
pub use mnemonic::stylize_mnemonics;
