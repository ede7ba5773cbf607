use crate::words;

/// Length bounds that make a word offending.
///
/// Lengths count Unicode scalar values, so `"Añadió"` has length 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Lower bound.
    pub min: usize,
    /// Upper bound.
    pub max: usize,
    /// Whether words of exactly `min` or `max` characters count.
    pub inclusive: bool,
}

impl LengthRange {
    /// `min <= len <= max`.
    #[inline]
    pub const fn inclusive(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            inclusive: true,
        }
    }

    /// `min < len < max`.
    #[inline]
    pub const fn exclusive(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            inclusive: false,
        }
    }

    /// Returns true if a word of `len` characters falls in the range.
    #[inline]
    pub const fn contains_len(&self, len: usize) -> bool {
        if self.inclusive {
            len >= self.min && len <= self.max
        } else {
            len > self.min && len < self.max
        }
    }

    /// Returns true if `word` is offending.
    ///
    /// The empty word never is, even when `min` is 0: a fragment made only of
    /// punctuation has nothing to highlight.
    pub fn is_offending(&self, word: &str) -> bool {
        !word.is_empty() && self.contains_len(word.chars().count())
    }
}

/// Collects the offending words of `text`, in order of appearance.
///
/// Duplicates are kept; [`OffendingPattern`](crate::OffendingPattern) removes them.
pub fn offending_words<'a>(text: &'a str, range: &LengthRange) -> Vec<&'a str> {
    words(text).filter(|word| range.is_offending(word)).collect()
}
