//! Row-store extraction from HTML markup.
//!
//! Parses a document with `scraper` and yields one [`TableData`] per
//! `<table>` element. Extraction is strict: a data row whose cell count
//! differs from the header is rejected with a descriptive error instead of
//! being silently truncated or padded.

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::ExtractError;

/// One extracted table: fixed column names plus a row-major cell matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    /// `<caption>` text, or a positional fallback like `Table 2`.
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reads a file and extracts its tables.
pub fn load_file(path: &Path) -> Result<Vec<TableData>, ExtractError> {
    let html = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })?;
    extract_tables(&html)
}

/// Extracts every `<table>` from an HTML document.
pub fn extract_tables(html: &str) -> Result<Vec<TableData>, ExtractError> {
    let document = Html::parse_document(html);
    let table_sel = selector("table");
    let caption_sel = selector("caption");
    let tr_sel = selector("tr");
    let th_sel = selector("th");
    let td_sel = selector("td");

    let mut tables = Vec::new();
    for (index, table) in document.select(&table_sel).enumerate() {
        let number = index + 1;
        let title = table
            .select(&caption_sel)
            .next()
            .map(|c| cell_text(&c))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("Table {number}"));

        let mut columns: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<String>> = Vec::new();

        for tr in table.select(&tr_sel) {
            if columns.is_empty() {
                let header: Vec<String> = tr.select(&th_sel).map(|c| cell_text(&c)).collect();
                if !header.is_empty() {
                    columns = header;
                    continue;
                }
            }

            let cells: Vec<String> = tr.select(&td_sel).map(|c| cell_text(&c)).collect();
            if cells.is_empty() {
                continue;
            }
            if columns.is_empty() {
                return Err(ExtractError::NoHeader { table: number });
            }
            if cells.len() != columns.len() {
                return Err(ExtractError::ColumnMismatch {
                    table: number,
                    row: rows.len() + 1,
                    expected: columns.len(),
                    found: cells.len(),
                });
            }
            rows.push(cells);
        }

        if columns.is_empty() {
            return Err(ExtractError::NoHeader { table: number });
        }

        debug!(table = %title, columns = columns.len(), rows = rows.len(), "extracted table");
        tables.push(TableData {
            title,
            columns,
            rows,
        });
    }

    if tables.is_empty() {
        return Err(ExtractError::NoTables);
    }
    Ok(tables)
}

fn selector(css: &str) -> Selector {
    // All selectors here are fixed, known-good strings.
    Selector::parse(css).unwrap()
}

/// Concatenated text content, whitespace-normalized.
fn cell_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PEOPLE: &str = r#"
        <table>
          <caption>People</caption>
          <thead>
            <tr><th>Name</th><th>Age</th></tr>
          </thead>
          <tbody>
            <tr><td>Mario</td><td>20</td></tr>
            <tr><td>Anna</td><td>31</td></tr>
            <tr><td>Luca</td><td>25</td></tr>
          </tbody>
        </table>
    "#;

    #[test]
    fn extracts_columns_and_rows() {
        let tables = extract_tables(PEOPLE).unwrap();
        assert_eq!(tables.len(), 1);
        let table = &tables[0];
        assert_eq!(table.title, "People");
        assert_eq!(table.columns, vec!["Name", "Age"]);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1], vec!["Anna", "31"]);
    }

    #[test]
    fn header_without_thead_is_accepted() {
        let html = "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>";
        let tables = extract_tables(html).unwrap();
        assert_eq!(tables[0].columns, vec!["A", "B"]);
        assert_eq!(tables[0].rows, vec![vec!["1", "2"]]);
        assert_eq!(tables[0].title, "Table 1");
    }

    #[test]
    fn multiple_tables_extract_independently() {
        let html = format!("{PEOPLE}<table><tr><th>X</th></tr><tr><td>9</td></tr></table>");
        let tables = extract_tables(&html).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].title, "Table 2");
        assert_eq!(tables[1].columns, vec!["X"]);
    }

    #[test]
    fn cell_text_is_whitespace_normalized() {
        let html = "<table><tr><th>Name</th></tr>\
                    <tr><td>  Mario \n   Rossi </td></tr></table>";
        let tables = extract_tables(html).unwrap();
        assert_eq!(tables[0].rows[0][0], "Mario Rossi");
    }

    #[test]
    fn nested_markup_inside_cells_is_flattened() {
        let html = "<table><tr><th>Name</th></tr>\
                    <tr><td><b>Mario</b> &amp; <i>Luigi</i></td></tr></table>";
        let tables = extract_tables(html).unwrap();
        assert_eq!(tables[0].rows[0][0], "Mario & Luigi");
    }

    #[test]
    fn column_count_mismatch_is_rejected() {
        let html = "<table><tr><th>A</th><th>B</th></tr>\
                    <tr><td>1</td><td>2</td></tr>\
                    <tr><td>only one</td></tr></table>";
        let err = extract_tables(html).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::ColumnMismatch {
                table: 1,
                row: 2,
                expected: 2,
                found: 1,
            }
        ));
    }

    #[test]
    fn table_without_header_is_rejected() {
        let html = "<table><tr><td>1</td><td>2</td></tr></table>";
        assert!(matches!(
            extract_tables(html),
            Err(ExtractError::NoHeader { table: 1 })
        ));
    }

    #[test]
    fn document_without_tables_is_rejected() {
        assert!(matches!(
            extract_tables("<p>nothing here</p>"),
            Err(ExtractError::NoTables)
        ));
    }

    #[test]
    fn empty_body_yields_zero_rows() {
        let html = "<table><thead><tr><th>A</th></tr></thead><tbody></tbody></table>";
        let tables = extract_tables(html).unwrap();
        assert!(tables[0].rows.is_empty());
    }

    #[test]
    fn load_file_reads_and_extracts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PEOPLE.as_bytes()).unwrap();
        let tables = load_file(file.path()).unwrap();
        assert_eq!(tables[0].rows.len(), 3);
    }

    #[test]
    fn load_file_reports_the_missing_path() {
        let err = load_file(Path::new("/nonexistent/tables.html")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tables.html"));
    }
}
