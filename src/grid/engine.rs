//! The view engine: filter, sort, page.
//!
//! [`compute_view`] is a pure function of the row store and the view state.
//! It holds no caches and cannot fail; an empty result is a legal view, not
//! an error.

use super::state::{SortDirection, ViewState};
use super::store::RowStore;

/// The visible subset derived from a store and a view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSlice {
    /// Record indices (into the store) for the current page, in display
    /// order.
    pub indices: Vec<usize>,
    /// Number of records passing the filter, across all pages.
    pub filtered_count: usize,
}

/// Derives the current page of record indices.
///
/// Filtering keeps a row when any cell contains the trimmed, lowercased
/// search key as a case-insensitive substring. Sorting compares the sort
/// column's string values byte-wise; the sort is stable, so ties keep the
/// original store order in both directions and re-sorting is idempotent.
/// Paging slices `[(page-1)*page_size, page*page_size)`; an out-of-range
/// page yields a short or empty slice.
pub fn compute_view(store: &RowStore, state: &ViewState) -> ViewSlice {
    let key = state.search_key.trim().to_lowercase();

    let mut indices: Vec<usize> = (0..store.len())
        .filter(|&i| key.is_empty() || matches_key(store, i, &key))
        .collect();

    if let Some(sort) = state.sort {
        indices.sort_by(|&a, &b| {
            let ordering = store.record(a).cell(sort.column).cmp(store.record(b).cell(sort.column));
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    let filtered_count = indices.len();
    let start = state.page.saturating_sub(1) * state.page_size;
    let indices: Vec<usize> = indices
        .into_iter()
        .skip(start)
        .take(state.page_size)
        .collect();

    ViewSlice {
        indices,
        filtered_count,
    }
}

fn matches_key(store: &RowStore, index: usize, key: &str) -> bool {
    store
        .record(index)
        .cells()
        .iter()
        .any(|cell| cell.to_lowercase().contains(key))
}
