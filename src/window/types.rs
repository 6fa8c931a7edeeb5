//! Window type
//!
//! Positions are indices into the full dataset, so page-info derivation
//! can compare the window's edges against the dataset's edges.

/// A contiguous sub-sequence of the dataset, as half-open positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Position of the first record in the window
    pub start: usize,
    /// Position one past the last record in the window
    pub end: usize,
}

impl Window {
    /// Create a window from half-open positions
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// An empty window at the dataset's start
    pub fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Number of records in the window
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the window holds no records
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Position of the window's first record, if any
    pub fn first_pos(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.start)
    }

    /// Position of the window's last record, if any
    pub fn last_pos(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end - 1)
    }
}
