//! Markdown rendering for AI feedback, chat messages, and guide bodies.
//!
//! Model output and guide content arrive as GFM markdown; both are rendered
//! to HTML here and pushed through the `htmlsafe` allow list before anything
//! reaches a page. Raw HTML inside the markdown is escaped by the renderer,
//! so sanitization is the second layer, not the only one.

pub mod markdown;

pub use markdown::{render_feedback, render_guide, to_html};
