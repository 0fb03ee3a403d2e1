//! Inline span transducer.
//!
//! Rewrites one line of text in a single left-to-right pass. The scanner keeps
//! two small pieces of state: which emphasis spans are open ([`SpanState`]) and
//! where it is inside a link ([`LinkState`]). Lookahead is limited to one
//! character, used to tell `**` from `*`.
//!
//! Spans left open at the end of the line stay open in the output, and an
//! unterminated link drops whatever it captured.

/// Open emphasis spans.
///
/// Emphasis can only ever enclose strong, never the other way around: while
/// strong is open a single `*` is copied literally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum SpanState {
    /// No span open.
    #[default]
    Plain,
    /// Inside `<strong>`.
    Strong,
    /// Inside `<em>`.
    Emphasis,
    /// Inside `<strong>` nested in `<em>`.
    EmphasisStrong,
}

impl SpanState {
    /// Transition on a `**` token. Always toggles strong.
    fn on_double_star(self) -> (Self, &'static str) {
        match self {
            Self::Plain => (Self::Strong, "<strong>"),
            Self::Strong => (Self::Plain, "</strong>"),
            Self::Emphasis => (Self::EmphasisStrong, "<strong>"),
            Self::EmphasisStrong => (Self::Emphasis, "</strong>"),
        }
    }

    /// Transition on a single `*`. Returns `None` when strong is open.
    fn on_single_star(self) -> Option<(Self, &'static str)> {
        match self {
            Self::Plain => Some((Self::Emphasis, "<em>")),
            Self::Emphasis => Some((Self::Plain, "</em>")),
            Self::Strong | Self::EmphasisStrong => None,
        }
    }
}

/// Position relative to a `[text](url)` link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum LinkState {
    /// Not inside a link.
    #[default]
    Outside,
    /// After `[`. Characters are swallowed until `]`.
    Text,
    /// Right after `]`. Only `(` continues the link.
    TextClosed,
    /// After `(`. Characters are buffered as the URL until `)`.
    Url,
}

/// Single-pass scanner for inline markup.
///
/// Feed it exactly one line; lookahead does not carry across [`feed`](Self::feed)
/// calls.
///
/// # Example
///
/// ```
/// use scribe_renderer::InlineScanner;
///
/// let mut scanner = InlineScanner::new();
/// scanner.feed("**open").feed(" [x](u) done");
/// assert_eq!(scanner.finish(), "<strong>open <a href=\"u\">u</a> done");
/// ```
#[derive(Debug, Default)]
pub struct InlineScanner {
    out: String,
    url: String,
    span: SpanState,
    link: LinkState,
}

impl InlineScanner {
    /// Create a scanner with empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner whose output buffer can hold `capacity` bytes without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Scan `line`, appending its markup to the output.
    pub fn feed(&mut self, line: &str) -> &mut Self {
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            let next_is_star = chars.peek() == Some(&'*');
            if self.step(c, next_is_star) {
                chars.next();
            }
        }
        self
    }

    /// Consume the scanner and return the markup produced so far.
    ///
    /// Open spans are not closed and a pending link is dropped.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    /// Process one character. Returns `true` when the lookahead `*` was
    /// consumed as part of a `**` token.
    fn step(&mut self, c: char, next_is_star: bool) -> bool {
        match self.link {
            LinkState::Text => {
                if c == ']' {
                    self.link = LinkState::TextClosed;
                }
                return false;
            }
            LinkState::Url => {
                if c == ')' {
                    self.emit_anchor();
                } else {
                    self.url.push(c);
                }
                return false;
            }
            LinkState::TextClosed => {
                if c == '(' {
                    self.link = LinkState::Url;
                    return false;
                }
                self.link = LinkState::Outside;
            }
            LinkState::Outside => {}
        }

        match c {
            '[' => {
                self.link = LinkState::Text;
                false
            }
            '*' if next_is_star => {
                let (span, tag) = self.span.on_double_star();
                self.span = span;
                self.out.push_str(tag);
                true
            }
            '*' => {
                match self.span.on_single_star() {
                    Some((span, tag)) => {
                        self.span = span;
                        self.out.push_str(tag);
                    }
                    None => self.out.push(c),
                }
                false
            }
            _ => {
                self.out.push(c);
                false
            }
        }
    }

    /// Anchor text is the URL itself; the bracketed text is not kept.
    fn emit_anchor(&mut self) {
        self.out.push_str("<a href=\"");
        self.out.push_str(&self.url);
        self.out.push_str("\">");
        self.out.push_str(&self.url);
        self.out.push_str("</a>");
        self.url.clear();
        self.link = LinkState::Outside;
    }
}

/// Rewrite inline markup in a single line.
///
/// Never fails. Lines without `*`, `[` or `(` come back unchanged.
///
/// # Examples
///
/// ```
/// use scribe_renderer::render_inline;
///
/// assert_eq!(render_inline("**bold**"), "<strong>bold</strong>");
/// assert_eq!(render_inline("*em*"), "<em>em</em>");
/// assert_eq!(
///     render_inline("[x](http://a)"),
///     "<a href=\"http://a\">http://a</a>"
/// );
/// ```
#[must_use]
pub fn render_inline(line: &str) -> String {
    let mut scanner = InlineScanner::with_capacity(line.len());
    scanner.feed(line);
    scanner.finish()
}
