//! Error types for grid construction and table extraction.

use thiserror::Error;

/// Configuration rejected at grid construction.
///
/// The grid never silently repairs a bad option: an unknown locale or an
/// unusable page size is surfaced to the caller before any state exists.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown locale '{code}' (supported: {supported})")]
    UnknownLocale { code: String, supported: String },

    #[error("page size must be at least 1")]
    ZeroPageSize,

    #[error("page size {size} is not one of the selectable sizes {options:?}")]
    PageSizeNotSelectable { size: usize, options: Vec<usize> },

    #[error("the selectable page-size set must not be empty")]
    EmptyPageSizes,
}

/// Failure while extracting tables from an HTML document.
///
/// Malformed markup is rejected here with enough context to fix the source;
/// the row store never holds a partially extracted table.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("document contains no tables")]
    NoTables,

    #[error("table {table}: no header cells found")]
    NoHeader { table: usize },

    #[error("table {table}, row {row}: expected {expected} cells, found {found}")]
    ColumnMismatch {
        table: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
}
