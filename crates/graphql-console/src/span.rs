use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range `[start, end)` into a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span. The bounds are reordered if given backwards so that `start <= end` holds.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Zero-width span at `offset`
    #[must_use]
    pub const fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Whether `other` lies entirely within this span (both ends inclusive)
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<apollo_parser::TextRange> for Span {
    fn from(range: apollo_parser::TextRange) -> Self {
        Self::new(range.start().into(), range.end().into())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
