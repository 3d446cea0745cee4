//! Pagination window computation.

use serde::Serialize;

/// Pagination controls derived from the current page and filtered size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Total page count, at least 1 even for an empty filtered set.
    pub total_pages: usize,
    /// Numbered controls to expose: every page within the window radius of
    /// the current page, clamped to `1..=total_pages`.
    pub pages: Vec<usize>,
    /// Whether the first/previous controls are active.
    pub show_first_prev: bool,
    /// Whether the next/last controls are active.
    pub show_next_last: bool,
}

/// Computes the sliding window of page controls.
pub fn compute_page_window(
    page: usize,
    page_size: usize,
    filtered_count: usize,
    radius: usize,
) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = filtered_count.div_ceil(page_size).max(1);

    let first = page.saturating_sub(radius).max(1);
    let last = page.saturating_add(radius).min(total_pages);
    let pages: Vec<usize> = (first..=last).collect();

    PageWindow {
        total_pages,
        pages,
        show_first_prev: page > 1,
        show_next_last: page < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filtered_set_still_has_one_page() {
        let window = compute_page_window(1, 10, 0, 2);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.pages, vec![1]);
        assert!(!window.show_first_prev);
        assert!(!window.show_next_last);
    }

    #[test]
    fn window_is_clamped_to_valid_pages() {
        // 25 rows at page size 10 -> 3 pages; radius 2 around page 2.
        let window = compute_page_window(2, 10, 25, 2);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.pages, vec![1, 2, 3]);
        assert!(window.show_first_prev);
        assert!(window.show_next_last);
    }

    #[test]
    fn window_in_the_middle_of_many_pages() {
        let window = compute_page_window(10, 10, 1000, 2);
        assert_eq!(window.total_pages, 100);
        assert_eq!(window.pages, vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_never_leaves_bounds_and_includes_current() {
        for filtered in [0usize, 1, 9, 10, 11, 95, 1000] {
            for radius in 0..4 {
                let total = filtered.div_ceil(10).max(1);
                for page in 1..=total {
                    let window = compute_page_window(page, 10, filtered, radius);
                    assert!(window.pages.iter().all(|&p| p >= 1 && p <= total));
                    assert!(window.pages.contains(&page));
                }
            }
        }
    }

    #[test]
    fn first_page_hides_first_prev() {
        let window = compute_page_window(1, 10, 100, 2);
        assert!(!window.show_first_prev);
        assert!(window.show_next_last);
        assert_eq!(window.pages, vec![1, 2, 3]);
    }

    #[test]
    fn last_page_hides_next_last() {
        let window = compute_page_window(10, 10, 100, 2);
        assert!(window.show_first_prev);
        assert!(!window.show_next_last);
        assert_eq!(window.pages, vec![8, 9, 10]);
    }

    #[test]
    fn radius_zero_exposes_only_the_current_page() {
        let window = compute_page_window(4, 10, 100, 0);
        assert_eq!(window.pages, vec![4]);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let window = compute_page_window(1, 10, 30, 2);
        assert_eq!(window.total_pages, 3);
    }
}
