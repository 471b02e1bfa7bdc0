//! Sliding history buffer.
//!
//! Logically an unbounded append-only byte sequence. Physically the buffer
//! is left-trimmed once it grows past twice the maximum match distance,
//! keeping only the bytes a match could still reach.

/// History of submitted bytes.
#[derive(Debug, Clone, Default)]
pub struct History {
    buf: Vec<u8>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all buffered bytes, keeping the allocation.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Drop stale bytes if the history exceeds `2 * max_distance`.
    ///
    /// Keeps the last `max_distance` bytes and returns how far the retained
    /// bytes moved, so stored positions can be rebased by the same amount.
    pub fn trim(&mut self, max_distance: usize) -> Option<usize> {
        if self.buf.len() <= max_distance.saturating_mul(2) {
            return None;
        }
        let delta = self.buf.len() - max_distance;
        self.buf.drain(..delta);
        Some(delta)
    }

    /// Append `src` and return the index at which it begins.
    pub fn append(&mut self, src: &[u8]) -> usize {
        let start = self.buf.len();
        self.buf.extend_from_slice(src);
        start
    }

    /// All buffered bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Number of buffered bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing is buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
