//! Documents and lines as seen by the scanners.
//!
//! The engine is stateless between calls: a [`Document`] is a snapshot of a
//! file's full text, replaced wholesale on every edit. Lines are borrowed
//! views into that text and are split on the language-server line
//! terminators `\n`, `\r\n` and `\r`.

/// A snapshot of one open document.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Document {
    uri: String,
    text: String,
}

impl Document {
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Document {
            uri: uri.into(),
            text: text.into(),
        }
    }

    /// The stable identity key of this document.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate the document's lines in index order.
    ///
    /// Always yields at least one line; a trailing terminator yields a final
    /// empty line.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            rest: Some(&self.text),
            index: 0,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Get a single line by index.
    pub fn line(&self, index: u32) -> Option<Line<'_>> {
        self.lines().nth(usize::try_from(index).ok()?)
    }
}

/// One line of a document, without its terminator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Line<'a> {
    index: u32,
    text: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(index: u32, text: &'a str) -> Self {
        Line { index, text }
    }

    /// Zero-based index within the owning document.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length in codepoints.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate `(column, codepoint)` pairs, left to right.
    pub fn codepoints(&self) -> impl Iterator<Item = (u32, char)> + 'a {
        (0u32..).zip(self.text.chars())
    }
}

/// Iterator over the lines of a [`Document`].
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    /// Unconsumed text; `None` once the final line has been yielded.
    rest: Option<&'a str>,
    index: u32,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        let rest = self.rest?;
        let text = match rest.find(['\n', '\r']) {
            Some(pos) => {
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = Some(&rest[pos + terminator..]);
                &rest[..pos]
            }
            None => {
                self.rest = None;
                rest
            }
        };
        let line = Line::new(self.index, text);
        self.index = self.index.saturating_add(1);
        Some(line)
    }
}
