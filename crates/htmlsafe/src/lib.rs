//! Allow-list HTML sanitization for untrusted portal content.
//!
//! Guide and exercise bodies are authored in a rich-text editor and stored
//! upstream exactly as written, so every render pass has to go through
//! [`sanitize_html`] (or the strict variant) before the markup is injected
//! into a page. Sanitization never fails: malformed or unsafe input degrades
//! to stripped output, and the worst case is an empty string.

pub mod options;
pub mod pattern;
pub mod policy;
mod sanitizer;
#[cfg(feature = "tree")]
pub mod tree;

pub use options::SanitizeOptions;
pub use sanitizer::{
    sanitize_html, sanitize_html_strict, sanitize_with_options, SanitizeEngine, Sanitizer,
};
