//! Per-grid options, read once at construction.

use crate::error::ConfigError;

/// Default selectable page sizes.
pub const DEFAULT_PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

/// Default pagination window radius (numbered controls either side of the
/// current page).
pub const DEFAULT_WINDOW_RADIUS: usize = 2;

/// Options for one grid instance.
///
/// Every grid owns its own copy; two grids built from the same document never
/// share configuration or state.
#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Enables the search controller. When false no search box is exposed
    /// and the search key stays permanently empty.
    pub search: bool,
    /// Two-letter UI language code. Unknown codes are a construction error.
    pub locale: String,
    /// Initial rows per page. Must be a member of `page_sizes`.
    pub page_size: usize,
    /// The selectable page-size set offered by the render adapter.
    pub page_sizes: Vec<usize>,
    /// Pagination window radius.
    pub window_radius: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            search: true,
            locale: "en".to_string(),
            page_size: 10,
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            window_radius: DEFAULT_WINDOW_RADIUS,
        }
    }
}

impl GridOptions {
    /// Validates the page-size settings. Locale validity is checked
    /// separately when the string table is resolved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_sizes.is_empty() {
            return Err(ConfigError::EmptyPageSizes);
        }
        if self.page_size == 0 || self.page_sizes.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if !self.page_sizes.contains(&self.page_size) {
            return Err(ConfigError::PageSizeNotSelectable {
                size: self.page_size,
                options: self.page_sizes.clone(),
            });
        }
        Ok(())
    }
}
