//! Selected card index, bounded to the deck.

use tracing::debug;

/// Holds the currently selected card index, always within `[0, len - 1]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexState {
    current: usize,
    len: usize,
}

impl IndexState {
    /// `len` must be at least 1 (guaranteed by [`crate::deck::Deck`])
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.current == self.len - 1
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.len
    }

    /// Set the index. Out-of-range values are ignored and `false` is returned.
    pub fn set(&mut self, next: usize) -> bool {
        if !self.contains(next) {
            debug!(next, len = self.len, "Ignoring out-of-range index");
            return false;
        }
        self.current = next;
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
