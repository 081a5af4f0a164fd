//! Inclusive token ranges

use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive range of token ids, as written in ONF (`3-5`).
///
/// The ends are kept exactly as parsed. Malformed input may produce `start > end`; the
/// parser does not correct it and the helpers below treat such a span as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens covered, `0` for an inverted span. Saturates at `usize::MAX`.
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, token_id: usize) -> bool {
        self.start <= token_id && token_id <= self.end
    }

    /// Whether the range reads left to right.
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}

impl fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<(usize, usize)> for TokenSpan {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token_span() {
        let span = TokenSpan::new(4, 4);
        assert_eq!(span.len(), 1);
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }

    #[test]
    fn test_inverted_span_is_kept() {
        let span = TokenSpan::from((7, 2));
        assert_eq!(span.start, 7);
        assert_eq!(span.end, 2);
        assert!(!span.is_ordered());
        assert!(span.is_empty());
    }

    #[test]
    fn test_full_width_span_saturates() {
        let span = TokenSpan::new(0, usize::MAX);
        assert_eq!(span.len(), usize::MAX);
        assert!(!span.is_empty());
        assert!(span.contains(usize::MAX));
        assert_eq!(TokenSpan::new(1, usize::MAX).len(), usize::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenSpan::new(0, 12).to_string(), "0-12");
    }
}
