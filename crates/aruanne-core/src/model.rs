use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered grid of string cells, as produced by the table extractor.
///
/// `index` is the table's position in extraction order within the source
/// document. Extraction order is not page or section order; the heading a
/// table belongs to is recovered later by lexical matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub index: usize,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(index: usize, rows: Vec<Vec<String>>) -> Table {
        Table { index, rows }
    }

    /// Distinct whitespace-delimited tokens over all cells, flattened.
    pub fn word_set(&self) -> HashSet<&str> {
        self.rows
            .iter()
            .flatten()
            .flat_map(|cell| cell.split_whitespace())
            .collect()
    }

    /// Widest row in the grid. Rows are not required to be equally wide.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One extracted table paired with the section heading it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledTable {
    pub keyword: String,
    pub table: Table,
}

/// The full labeled workbook for one document, sheets already in export
/// order (reverse association order, see `export::assemble_workbook`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledTables {
    pub sheets: Vec<LabeledTable>,
}

/// One uploaded document: the filename is carried through to the merged
/// output as a column prefix.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Wide dataset produced by outer-joining per-document tables on a shared
/// row-key column. `None` cells are join nulls, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}
