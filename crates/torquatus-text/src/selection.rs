//! Half-open selection ranges over character positions.

use std::ops::Range;

/// A half-open interval `[start, end)` of character positions.
///
/// `start == end` is a bare cursor with no characters selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionRange {
    /// First selected position.
    pub start: usize,
    /// One past the last selected position.
    pub end: usize,
}

impl SelectionRange {
    /// Create a selection between two positions, in either order.
    pub fn new(anchor: usize, head: usize) -> Self {
        Self {
            start: anchor.min(head),
            end: anchor.max(head),
        }
    }

    /// A cursor at `position`.
    pub fn cursor(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Check if no characters are selected.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Restrict the selection to a document of `len` characters.
    pub fn clamp(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }

    /// The selection as a standard range.
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for SelectionRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
