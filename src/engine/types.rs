//! Engine types
//!
//! Loop state and statistics for the fetch loop.

use crate::pagination::ContinuationToken;

/// Lifecycle of a single fetch loop invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Not started yet, or between round-trips
    #[default]
    Fetching,
    /// Exhausted pages, or the single manual page was delivered
    Done,
    /// A round-trip (or the page sink) failed
    Failed,
    /// The host cancelled the loop
    Cancelled,
}

impl LoopState {
    /// Check if the loop has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Fetching)
    }
}

/// Statistics from a fetch loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Successful round-trips
    pub pages_fetched: usize,
    /// Token returned by the last page but not followed (manual paging)
    pub unused_token: Option<ContinuationToken>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl LoopStats {
    /// Add a page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
