//! Physical source lines handed to the scanners.

/// One physical line of a source file and its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// Line number (1-indexed).
    pub number: usize,
    /// Raw line text without the trailing newline.
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Creates a line.
    #[must_use]
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// Numbers a file's content, one entry per line, starting at 1.
    ///
    /// Blank and comment lines are kept so numbering matches the file.
    #[must_use]
    pub fn from_source(content: &'a str) -> Vec<Self> {
        Self::number(content.lines())
    }

    /// Numbers an already split sequence of lines.
    #[must_use]
    pub fn number<I>(lines: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| Self::new(i + 1, text))
            .collect()
    }

    /// Line text with indentation and trailing whitespace removed.
    #[must_use]
    pub fn code(&self) -> &'a str {
        self.text.trim()
    }

    /// Whitespace-separated words of [`code`](Self::code).
    pub fn words(&self) -> impl Iterator<Item = &'a str> {
        self.code().split_whitespace()
    }

    /// Returns the `index`-th word, if present.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&'a str> {
        self.words().nth(index)
    }
}
