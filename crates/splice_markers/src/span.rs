// crates/splice_markers/src/span.rs

use crate::error::SpliceError;

/// Half-open byte range `[start, end)` of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Number of bytes covered. Zero for an inverted span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that `start <= end <= document.len()` and that both ends fall
    /// on UTF-8 character boundaries.
    pub fn validate(&self, document: &str) -> Result<(), SpliceError> {
        let in_bounds = self.start <= self.end && self.end <= document.len();
        if in_bounds && document.is_char_boundary(self.start) && document.is_char_boundary(self.end) {
            Ok(())
        } else {
            Err(SpliceError::InvalidSpan {
                start: self.start,
                end: self.end,
                len: document.len(),
            })
        }
    }
}
