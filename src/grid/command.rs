//! Named user operations applied to a grid.

/// One user action. Every interaction maps to exactly one command followed
/// by one recompute+render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search key with the (raw) input text.
    Search(String),
    /// Activate sort on a column (header click or keyboard activation).
    Sort(usize),
    /// Navigate to a 1-based page number.
    GoToPage(usize),
    /// Select a new page size from the configured set.
    SetPageSize(usize),
}
