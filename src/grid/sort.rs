//! Sort controller: the per-header activation cycle.

use super::state::{SortDirection, SortSpec};

/// Applies one header activation to the current sort.
///
/// Activating the already sorted column toggles its direction; activating
/// any other column starts it ascending and implicitly resets the previous
/// one, so at most one column is ever sorted.
pub fn cycle_sort(current: Option<SortSpec>, column: usize) -> SortSpec {
    match current {
        Some(spec) if spec.column == column => SortSpec {
            column,
            direction: spec.direction.toggled(),
        },
        _ => SortSpec {
            column,
            direction: SortDirection::Ascending,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsorted_column_starts_ascending() {
        let spec = cycle_sort(None, 2);
        assert_eq!(spec.column, 2);
        assert_eq!(spec.direction, SortDirection::Ascending);
    }

    #[test]
    fn repeated_activation_cycles_asc_desc_asc() {
        let first = cycle_sort(None, 0);
        let second = cycle_sort(Some(first), 0);
        let third = cycle_sort(Some(second), 0);
        assert_eq!(first.direction, SortDirection::Ascending);
        assert_eq!(second.direction, SortDirection::Descending);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn switching_column_restarts_ascending() {
        let on_first = cycle_sort(Some(cycle_sort(None, 0)), 0); // column 0 descending
        let moved = cycle_sort(Some(on_first), 3);
        assert_eq!(moved.column, 3);
        assert_eq!(moved.direction, SortDirection::Ascending);
    }
}
