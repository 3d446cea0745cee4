//! Authoritative row storage.
//!
//! A [`RowStore`] is built once from an extracted table and never mutated
//! afterwards; every derived view is recomputed from it on demand.

use serde::Serialize;

/// One data row. Cells are parallel to the store's column list, so every
/// record carries exactly the same columns in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    cells: Vec<String>,
}

impl Record {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell value for a column index. Indices come from the owning store,
    /// so a miss indicates a caller bug rather than bad data.
    pub fn cell(&self, column: usize) -> &str {
        &self.cells[column]
    }
}

/// Ordered, immutable sequence of records with a fixed column set.
#[derive(Debug, Clone)]
pub struct RowStore {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RowStore {
    /// Builds a store from already validated rows. Extraction guarantees the
    /// column-count invariant; direct callers must uphold it themselves.
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        debug_assert!(
            records.iter().all(|r| r.cells.len() == columns.len()),
            "record width must match the column count"
        );
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: usize) -> &Record {
        &self.records[index]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn store_from(columns: &[&str], rows: &[&[&str]]) -> RowStore {
    RowStore::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|r| Record::new(r.iter().map(|c| c.to_string()).collect()))
            .collect(),
    )
}
