//! Block-level line classification and document rendering.

use crate::inline::render_inline;

/// Kind of a single source line, with its prefix stripped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block<'a> {
    /// `# `, `## ` or `### ` heading.
    Heading {
        /// Heading level (1-3).
        level: u8,
        /// Text after the marker.
        text: &'a str,
    },
    /// `- ` list item. Each one renders as its own `<ul>`.
    ListItem(&'a str),
    /// Any other line, including blank ones.
    Paragraph(&'a str),
}

impl<'a> Block<'a> {
    /// Classify a line by its leading characters.
    ///
    /// Deeper headings are tested first so `### ` is never read as `# `.
    pub fn classify(line: &'a str) -> Self {
        if let Some(text) = line.strip_prefix("### ") {
            Self::Heading { level: 3, text }
        } else if let Some(text) = line.strip_prefix("## ") {
            Self::Heading { level: 2, text }
        } else if let Some(text) = line.strip_prefix("# ") {
            Self::Heading { level: 1, text }
        } else if let Some(text) = line.strip_prefix("- ") {
            Self::ListItem(text)
        } else {
            Self::Paragraph(line)
        }
    }

    /// Append this block's markup to `out`.
    ///
    /// Only paragraphs go through the inline transducer; heading and list
    /// text is copied as is.
    pub fn write_html(&self, out: &mut String) {
        match *self {
            Self::Heading { level, text } => {
                out.push_str(&format!("<h{level}>{text}</h{level}>"));
            }
            Self::ListItem(text) => {
                out.push_str("<ul><li>");
                out.push_str(text);
                out.push_str("</li></ul>");
            }
            Self::Paragraph(line) => {
                out.push_str(&render_inline(line));
                out.push_str("<br>");
            }
        }
    }
}

/// Render a whole document.
///
/// Lines are split on `\n` (a trailing `\r` is dropped) and their markup is
/// concatenated without separators. A final newline does not add an empty
/// line.
#[must_use]
pub fn render_document(source: &str) -> String {
    let mut html = String::with_capacity(source.len() + source.len() / 2);
    for line in source.lines() {
        Block::classify(line).write_html(&mut html);
    }
    html
}
