//! The grid core: row store, view state, and the command/recompute cycle.
//!
//! One [`Grid`] exists per source table. It owns the extracted rows, the
//! current view parameters, and the resolved UI strings; grids never share
//! state. All mutation goes through [`Grid::apply`], after which
//! [`Grid::view`] rebuilds the full render-adapter model.

pub mod command;
pub mod engine;
pub mod pager;
pub mod sort;
pub mod state;
pub mod store;

pub use command::Command;
pub use engine::{ViewSlice, compute_view};
pub use pager::{PageWindow, compute_page_window};
pub use state::{SortDirection, SortSpec, ViewState};
pub use store::{Record, RowStore};

use tracing::debug;

use crate::config::GridOptions;
use crate::error::ConfigError;
use crate::extract::TableData;
use crate::locale::{self, LocaleStrings};
use crate::view::{
    GridBody, GridView, HeaderView, PageSizeView, PagerView, RowView, SearchView,
};

/// One interactive grid over one extracted table.
pub struct Grid {
    title: String,
    store: RowStore,
    state: ViewState,
    options: GridOptions,
    strings: &'static LocaleStrings,
}

impl Grid {
    /// Builds a grid from an extracted table, failing fast on bad options.
    pub fn new(table: TableData, options: GridOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let strings = locale::strings(&options.locale)?;

        let records = table.rows.into_iter().map(Record::new).collect();
        let store = RowStore::new(table.columns, records);
        let state = ViewState::new(options.page_size);

        Ok(Self {
            title: table.title,
            store,
            state,
            options,
            strings,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[String] {
        self.store.columns()
    }

    pub fn row_count(&self) -> usize {
        self.store.len()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn search_enabled(&self) -> bool {
        self.options.search
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.options.page_sizes
    }

    /// Page count for the current filter, never below 1.
    pub fn total_pages(&self) -> usize {
        let filtered = compute_view(&self.store, &self.state).filtered_count;
        filtered.div_ceil(self.state.page_size).max(1)
    }

    /// Applies one command and reports whether the view changed. A false
    /// return lets adapters skip the repaint.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = match command {
            Command::Search(input) => self.apply_search(&input),
            Command::Sort(column) => self.apply_sort(column),
            Command::GoToPage(page) => self.apply_go_to_page(page),
            Command::SetPageSize(size) => self.apply_page_size(size),
        };
        if changed {
            debug!(
                table = %self.title,
                page = self.state.page,
                page_size = self.state.page_size,
                search = %self.state.search_key,
                "view state changed"
            );
        }
        changed
    }

    fn apply_search(&mut self, input: &str) -> bool {
        if !self.options.search {
            return false;
        }
        let key = input.trim().to_lowercase();
        if key == self.state.search_key {
            return false;
        }
        self.state.search_key = key;
        self.state.page = 1;
        true
    }

    fn apply_sort(&mut self, column: usize) -> bool {
        if column >= self.store.columns().len() {
            return false;
        }
        // The current page is preserved: sorting reorders the filtered set
        // without changing its size, so the page stays in range.
        self.state.sort = Some(sort::cycle_sort(self.state.sort, column));
        true
    }

    fn apply_go_to_page(&mut self, page: usize) -> bool {
        if page == self.state.page || page < 1 || page > self.total_pages() {
            return false;
        }
        self.state.page = page;
        true
    }

    fn apply_page_size(&mut self, size: usize) -> bool {
        if size == self.state.page_size || !self.options.page_sizes.contains(&size) {
            return false;
        }
        self.state.page_size = size;
        self.state.page = 1;
        true
    }

    /// Rebuilds the complete view model for render adapters.
    pub fn view(&self) -> GridView {
        let slice = compute_view(&self.store, &self.state);
        let window = compute_page_window(
            self.state.page,
            self.state.page_size,
            slice.filtered_count,
            self.options.window_radius,
        );

        let headers = self
            .store
            .columns()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let sort = self
                    .state
                    .sort
                    .filter(|spec| spec.column == i)
                    .map(|spec| spec.direction);
                HeaderView {
                    name: name.clone(),
                    sort,
                    sort_label: match sort {
                        None => self.strings.sort_none,
                        Some(SortDirection::Ascending) => self.strings.sort_ascending,
                        Some(SortDirection::Descending) => self.strings.sort_descending,
                    },
                }
            })
            .collect();

        let body = if slice.filtered_count == 0 {
            GridBody::NoResult(self.strings.no_result)
        } else {
            GridBody::Rows(
                slice
                    .indices
                    .iter()
                    .map(|&i| RowView {
                        cells: self.store.record(i).cells().to_vec(),
                    })
                    .collect(),
            )
        };

        let from = if slice.filtered_count == 0 {
            0
        } else {
            (self.state.page - 1) * self.state.page_size + 1
        };
        let to = (self.state.page - 1) * self.state.page_size + slice.indices.len();
        let status = locale::format_status(self.strings.status, from, to, slice.filtered_count);

        GridView {
            title: self.title.clone(),
            headers,
            body,
            pager: PagerView {
                current: self.state.page,
                total_pages: window.total_pages,
                pages: window.pages,
                show_first_prev: window.show_first_prev,
                show_next_last: window.show_next_last,
                first_label: self.strings.first,
                previous_label: self.strings.previous,
                next_label: self.strings.next,
                last_label: self.strings.last,
            },
            status,
            search: self.options.search.then(|| SearchView {
                key: self.state.search_key.clone(),
                placeholder: self.strings.search_placeholder,
            }),
            page_size: PageSizeView {
                current: self.state.page_size,
                options: self.options.page_sizes.clone(),
                label: self.strings.per_page,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: usize) -> TableData {
        TableData {
            title: "People".to_string(),
            columns: vec!["Name".to_string(), "Age".to_string()],
            rows: (0..rows)
                .map(|i| vec![format!("person{i:02}"), (20 + i % 50).to_string()])
                .collect(),
        }
    }

    fn people() -> TableData {
        TableData {
            title: "People".to_string(),
            columns: vec!["Name".to_string(), "Age".to_string()],
            rows: vec![
                vec!["Mario".to_string(), "20".to_string()],
                vec!["Anna".to_string(), "31".to_string()],
                vec!["Luca".to_string(), "25".to_string()],
            ],
        }
    }

    fn grid(table: TableData) -> Grid {
        Grid::new(table, GridOptions::default()).unwrap()
    }

    fn rows(view: &GridView) -> Vec<Vec<String>> {
        match &view.body {
            GridBody::Rows(rows) => rows.iter().map(|r| r.cells.clone()).collect(),
            GridBody::NoResult(_) => panic!("expected rows"),
        }
    }

    #[test]
    fn unknown_locale_fails_construction() {
        let options = GridOptions {
            locale: "xx".to_string(),
            ..GridOptions::default()
        };
        assert!(matches!(
            Grid::new(people(), options),
            Err(ConfigError::UnknownLocale { .. })
        ));
    }

    #[test]
    fn invalid_page_size_fails_construction() {
        let options = GridOptions {
            page_size: 7,
            ..GridOptions::default()
        };
        assert!(Grid::new(people(), options).is_err());
    }

    #[test]
    fn search_scenario_anna() {
        let mut g = Grid::new(
            people(),
            GridOptions {
                page_size: 10,
                ..GridOptions::default()
            },
        )
        .unwrap();
        assert!(g.apply(Command::Search("an".to_string())));

        let view = g.view();
        assert_eq!(rows(&view), vec![vec!["Anna".to_string(), "31".to_string()]]);
        assert_eq!(view.status, "Showing 1 to 1 of 1 entries");
        assert_eq!(view.pager.total_pages, 1);
    }

    #[test]
    fn sort_scenario_by_age() {
        let mut g = grid(people());
        assert!(g.apply(Command::Sort(1)));

        let names: Vec<String> = rows(&g.view()).into_iter().map(|r| r[0].clone()).collect();
        assert_eq!(names, vec!["Mario", "Luca", "Anna"]);
    }

    #[test]
    fn sort_cycle_toggles_direction() {
        let mut g = grid(people());
        g.apply(Command::Sort(1));
        g.apply(Command::Sort(1));

        let names: Vec<String> = rows(&g.view()).into_iter().map(|r| r[0].clone()).collect();
        assert_eq!(names, vec!["Anna", "Luca", "Mario"]);

        let view = g.view();
        assert_eq!(view.headers[1].sort, Some(SortDirection::Descending));
        assert_eq!(view.headers[0].sort, None);
    }

    #[test]
    fn sorting_a_second_column_unsorts_the_first() {
        let mut g = grid(people());
        g.apply(Command::Sort(1));
        g.apply(Command::Sort(0));

        let view = g.view();
        assert_eq!(view.headers[0].sort, Some(SortDirection::Ascending));
        assert_eq!(view.headers[1].sort, None);
    }

    #[test]
    fn sort_preserves_the_current_page() {
        let mut g = grid(table(35));
        g.apply(Command::GoToPage(3));
        g.apply(Command::Sort(0));
        assert_eq!(g.state().page, 3);
    }

    #[test]
    fn search_resets_to_page_one() {
        let mut g = grid(table(35));
        g.apply(Command::GoToPage(3));
        g.apply(Command::Search("person".to_string()));
        assert_eq!(g.state().page, 1);
    }

    #[test]
    fn page_size_change_resets_to_page_one() {
        let mut g = grid(table(60));
        g.apply(Command::GoToPage(4));
        assert!(g.apply(Command::SetPageSize(30)));
        assert_eq!(g.state().page, 1);
        assert_eq!(g.state().page_size, 30);
    }

    #[test]
    fn page_size_outside_the_set_is_a_no_op() {
        let mut g = grid(table(60));
        assert!(!g.apply(Command::SetPageSize(7)));
        assert_eq!(g.state().page_size, 10);
    }

    #[test]
    fn navigation_to_the_current_page_is_a_no_op() {
        let mut g = grid(table(35));
        assert!(!g.apply(Command::GoToPage(1)));
        assert!(g.apply(Command::GoToPage(2)));
        assert!(!g.apply(Command::GoToPage(2)));
    }

    #[test]
    fn navigation_out_of_range_is_a_no_op() {
        let mut g = grid(table(35));
        assert!(!g.apply(Command::GoToPage(0)));
        assert!(!g.apply(Command::GoToPage(5)));
        assert_eq!(g.state().page, 1);
    }

    #[test]
    fn no_match_yields_no_result_state() {
        let mut g = grid(people());
        g.apply(Command::Search("zzz".to_string()));

        let view = g.view();
        assert!(view.is_empty());
        assert!(matches!(view.body, GridBody::NoResult("No results found")));
        assert_eq!(view.pager.total_pages, 1);
        assert_eq!(view.status, "Showing 0 to 0 of 0 entries");
    }

    #[test]
    fn search_disabled_makes_search_a_no_op() {
        let options = GridOptions {
            search: false,
            ..GridOptions::default()
        };
        let mut g = Grid::new(people(), options).unwrap();
        assert!(!g.apply(Command::Search("an".to_string())));
        assert!(g.view().search.is_none());
        assert_eq!(rows(&g.view()).len(), 3);
    }

    #[test]
    fn search_does_not_reset_sort_and_vice_versa() {
        let mut g = grid(people());
        g.apply(Command::Sort(1));
        g.apply(Command::Search("a".to_string()));
        assert!(g.state().sort.is_some());

        g.apply(Command::Sort(0));
        assert_eq!(g.state().search_key, "a");
    }

    #[test]
    fn status_line_on_a_middle_page() {
        let mut g = grid(table(35));
        g.apply(Command::GoToPage(2));
        let view = g.view();
        assert_eq!(view.status, "Showing 11 to 20 of 35 entries");
        assert_eq!(view.pager.pages, vec![1, 2, 3, 4]);
    }

    #[test]
    fn localized_view_strings() {
        let options = GridOptions {
            locale: "it".to_string(),
            ..GridOptions::default()
        };
        let g = Grid::new(people(), options).unwrap();
        let view = g.view();
        assert_eq!(view.status, "Da 1 a 3 di 3 risultati");
        assert_eq!(view.pager.next_label, "Successiva");
        assert_eq!(view.search.unwrap().placeholder, "Cerca...");
    }

    #[test]
    fn repeated_search_with_same_key_is_a_no_op() {
        let mut g = grid(people());
        assert!(g.apply(Command::Search(" AN ".to_string())));
        // Normalization makes the repeat identical.
        assert!(!g.apply(Command::Search("an".to_string())));
    }
}
