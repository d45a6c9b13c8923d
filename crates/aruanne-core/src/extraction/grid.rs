use crate::error::AruanneError;
use crate::extraction::pdftotext::{run_pdftotext, write_temp_pdf};
use crate::extraction::TableExtractor;
use crate::model::Table;
use regex::Regex;

/// Table grid extraction backend using pdftotext -layout.
///
/// `pdftotext -layout` preserves column alignment with spaces. Lines that
/// split into two or more cells on runs of two-plus spaces are treated as
/// grid lines; contiguous runs of grid lines become one table. Tables are
/// numbered in document order across all pages.
pub struct LayoutTableExtractor {
    cell_split: Regex,
}

impl LayoutTableExtractor {
    pub fn new() -> Self {
        LayoutTableExtractor {
            cell_split: Regex::new(r"\s{2,}").unwrap(),
        }
    }
}

impl Default for LayoutTableExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for LayoutTableExtractor {
    fn extract_tables(&self, pdf_bytes: &[u8]) -> Result<Vec<Table>, AruanneError> {
        let tmpfile = write_temp_pdf(pdf_bytes)?;
        let text = run_pdftotext(tmpfile.path(), &["-layout"])?;
        Ok(tables_from_layout_text(&text, &self.cell_split))
    }

    fn backend_name(&self) -> &str {
        "pdftotext-layout"
    }
}

/// Reconstruct table grids from pdftotext -layout output.
///
/// A grid line is one that yields at least two cells when split on runs of
/// two or more spaces. A run of at least two consecutive grid lines is one
/// table. Page breaks (form feeds) end the current run.
pub fn tables_from_layout_text(text: &str, cell_split: &Regex) -> Vec<Table> {
    // A single aligned line on its own is running text, not a table.
    fn flush(current: &mut Vec<Vec<String>>, tables: &mut Vec<Table>) {
        if current.len() >= 2 {
            tables.push(Table::new(tables.len(), std::mem::take(current)));
        } else {
            current.clear();
        }
    }

    let mut tables = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for page in text.split('\x0c') {
        for line in page.lines() {
            match split_cells(line, cell_split) {
                Some(cells) => current.push(cells),
                None => flush(&mut current, &mut tables),
            }
        }
        flush(&mut current, &mut tables);
    }

    tables
}

/// Split a layout line into cells, or None if it does not look like a
/// table row (fewer than two cells).
fn split_cells(line: &str, cell_split: &Regex) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cells: Vec<String> = cell_split
        .split(trimmed)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    if cells.len() >= 2 {
        Some(cells)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_re() -> Regex {
        Regex::new(r"\s{2,}").unwrap()
    }

    #[test]
    fn test_split_cells() {
        let re = split_re();
        assert_eq!(
            split_cells("  Raha         100    200", &re),
            Some(vec!["Raha".into(), "100".into(), "200".into()])
        );
        assert_eq!(split_cells("Aruande kokkuvõte", &re), None);
        assert_eq!(split_cells("", &re), None);
    }

    #[test]
    fn test_contiguous_grid_lines_become_one_table() {
        let text = "\
Bilanss seisuga 31.12.2023

  Raha            100     200
  Nõuded           50      60

Lõpp
";
        let tables = tables_from_layout_text(text, &split_re());
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].index, 0);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[0].rows[0], vec!["Raha", "100", "200"]);
    }

    #[test]
    fn test_single_aligned_line_is_not_a_table() {
        let text = "Pealkiri     2023\n\nTavaline tekst\n";
        let tables = tables_from_layout_text(text, &split_re());
        assert!(tables.is_empty());
    }

    #[test]
    fn test_tables_numbered_in_document_order_across_pages() {
        let text = "\
  a    b
  c    d
\x0c  e    f
  g    h
";
        let tables = tables_from_layout_text(text, &split_re());
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].index, 0);
        assert_eq!(tables[1].index, 1);
        assert_eq!(tables[1].rows[0], vec!["e", "f"]);
    }

    #[test]
    fn test_page_break_ends_current_table() {
        let text = "  a    b\n  c    d\x0c  e    f\n  g    h\n";
        let tables = tables_from_layout_text(text, &split_re());
        assert_eq!(tables.len(), 2);
    }
}
