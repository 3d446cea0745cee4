//! UI-agnostic view models.
//!
//! [`GridView`] is the render-adapter contract: everything a frontend needs
//! to paint one grid - header cells with sort state, the current page of
//! rows (or the no-result message), pagination controls, the substituted
//! status line, and the search/page-size control state. The core emits these
//! models and never performs visual styling itself.

use serde::Serialize;

use crate::grid::SortDirection;

/// One header cell with its accessible sort state.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderView {
    pub name: String,
    /// `None` while the column is unsorted.
    pub sort: Option<SortDirection>,
    /// Localized sort-state label for assistive surfaces.
    pub sort_label: &'static str,
}

/// One visual row: a cell per column, in header order.
#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub cells: Vec<String>,
}

/// The table body: either the page's rows or a single full-width message
/// replacing an empty table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridBody {
    Rows(Vec<RowView>),
    NoResult(&'static str),
}

/// Pagination controls with their enabled states and labels.
#[derive(Debug, Clone, Serialize)]
pub struct PagerView {
    pub current: usize,
    pub total_pages: usize,
    /// Numbered controls to expose, already windowed and clamped.
    pub pages: Vec<usize>,
    pub show_first_prev: bool,
    pub show_next_last: bool,
    pub first_label: &'static str,
    pub previous_label: &'static str,
    pub next_label: &'static str,
    pub last_label: &'static str,
}

/// Search box state. Absent when search is disabled for the grid.
#[derive(Debug, Clone, Serialize)]
pub struct SearchView {
    /// The normalized key currently applied.
    pub key: String,
    pub placeholder: &'static str,
}

/// Page-size selector state.
#[derive(Debug, Clone, Serialize)]
pub struct PageSizeView {
    pub current: usize,
    pub options: Vec<usize>,
    pub label: &'static str,
}

/// Complete render-adapter input for one grid.
#[derive(Debug, Clone, Serialize)]
pub struct GridView {
    pub title: String,
    pub headers: Vec<HeaderView>,
    pub body: GridBody,
    pub pager: PagerView,
    /// Range-status text with `{FROM}`/`{TO}`/`{SIZE}` already substituted.
    pub status: String,
    pub search: Option<SearchView>,
    pub page_size: PageSizeView,
}

impl GridView {
    /// Convenience for adapters that treat the no-result state separately.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, GridBody::NoResult(_))
    }
}
