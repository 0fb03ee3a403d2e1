//! Minimal markdown-to-HTML transducer.
//!
//! Rendering happens in two layers:
//! - [`Block`] classifies each line by its leading characters (headings,
//!   list items, everything else).
//! - [`render_inline`] rewrites the remaining lines character by character,
//!   recognizing `**strong**`, `*emphasis*` and `[text](url)` links.
//!
//! Both layers are total: malformed input degrades into odd-looking markup
//! instead of failing. Markup metacharacters are not escaped.
//!
//! # Example
//!
//! ```
//! use scribe_renderer::render_document;
//!
//! let html = render_document("# Hello\nSome **bold** text");
//! assert_eq!(html, "<h1>Hello</h1>Some <strong>bold</strong> text<br>");
//! ```

mod block;
mod inline;

pub use block::{Block, render_document};
pub use inline::{InlineScanner, render_inline};
