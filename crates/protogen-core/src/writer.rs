//! Line-oriented source builder with scoped indentation

/// Append-only source text buffer.
///
/// Lines are indented with one tab per level, matching `gofmt`. Prefer
/// [`block`](CodeWriter::block) over manual [`indent`](CodeWriter::indent) /
/// [`outdent`](CodeWriter::outdent) pairs: it writes the closing line and
/// restores the indentation however the body returns.
///
/// # Example
///
/// ```
/// use protogen_core::CodeWriter;
///
/// let mut w = CodeWriter::new();
/// w.block("func (r *Rule) Default() {", "}", |w| {
///     w.line("r.Kind = \"Rule\"");
/// });
///
/// assert_eq!(w.as_str(), "func (r *Rule) Default() {\n\tr.Kind = \"Rule\"\n}\n");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl CodeWriter {
    /// Create an empty writer at depth zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth.
    ///
    /// An empty line is written without indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push('\t');
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    /// Write an empty line
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Increase the depth by one level
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease the depth by one level, stopping at zero
    pub fn outdent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current indentation depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write `open`, run `body` one level deeper, then write `close` at the
    /// original depth. The body's return value is passed through, so a body
    /// returning `Err` still gets its block closed.
    pub fn block<T>(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self) -> T) -> T {
        let depth = self.depth;
        self.line(open);
        self.depth = depth + 1;
        let result = body(self);
        self.depth = depth;
        self.line(close);
        result
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the writer and return the text
    pub fn into_string(self) -> String {
        self.buf
    }
}
