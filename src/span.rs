//! Source locations for diagnostics.

use std::fmt;

/// A byte range in the source text, with the 1-based line and column of its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Number of source bytes covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(4, 7, 2, 3).to_string(), "2:3");
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(4, 7, 2, 3);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(Span::new(9, 9, 1, 10).is_empty());
    }
}
