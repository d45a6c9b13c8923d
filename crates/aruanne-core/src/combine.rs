use crate::model::{MergedTable, Table};
use std::collections::HashMap;
use std::path::Path;

/// Drop every column where at least one cell contains the marker substring.
///
/// Used to strip note-reference columns (e.g. "Lisa 4") before the
/// cross-document merge. Idempotent: filtering an already-filtered table
/// changes nothing.
pub fn filter_marked_columns(table: &Table, marker: &str) -> Table {
    let column_count = table.column_count();
    let keep: Vec<bool> = (0..column_count)
        .map(|col| {
            !table
                .rows
                .iter()
                .any(|row| row.get(col).is_some_and(|cell| cell.contains(marker)))
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(col, _)| keep[*col])
                .map(|(_, cell)| cell.clone())
                .collect()
        })
        .collect();

    Table::new(table.index, rows)
}

/// Outer-join per-document tables into one wide dataset.
///
/// The first row of each table is its header; the first column is the row
/// key. The row-key column keeps the header of the first document's table
/// (first table with at least one column, so a document whose columns were
/// all filtered away cannot break the join). Every other column is renamed
/// `{file stem}_{header}` to disambiguate identically named columns across
/// documents.
///
/// Row order is the order keys are first seen; unmatched cells are null.
/// The output key set is the union of the input key sets.
pub fn merge_tables(inputs: &[(String, Table)]) -> MergedTable {
    let key_column = inputs
        .iter()
        .find_map(|(_, table)| table.rows.first().and_then(|header| header.first()))
        .cloned()
        .unwrap_or_default();

    let mut columns = vec![key_column];
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut key_index: HashMap<String, usize> = HashMap::new();

    for (filename, table) in inputs {
        let Some((header, data)) = table.rows.split_first() else {
            continue;
        };
        if header.is_empty() {
            continue;
        }

        let stem = file_stem(filename);
        let first_value_column = columns.len();
        for name in &header[1..] {
            let column = unique_column_name(&columns, &format!("{stem}_{name}"));
            columns.push(column);
        }
        for row in rows.iter_mut() {
            row.resize(columns.len(), None);
        }

        for row in data {
            let Some(key) = row.first() else { continue };
            let at = *key_index.entry(key.clone()).or_insert_with(|| {
                let mut fresh = vec![None; columns.len()];
                fresh[0] = Some(key.clone());
                rows.push(fresh);
                rows.len() - 1
            });
            for (offset, cell) in row.iter().skip(1).enumerate() {
                let col = first_value_column + offset;
                // Header row decides this document's width; wider data
                // rows are truncated to it.
                if col < columns.len() {
                    rows[at][col] = Some(cell.clone());
                }
            }
        }
    }

    MergedTable { columns, rows }
}

/// Filename without directory or extension, used as the column prefix.
fn file_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Suffix a candidate column name until it collides with nothing already
/// taken (e.g. two documents sharing a file stem).
fn unique_column_name(taken: &[String], candidate: &str) -> String {
    if !taken.iter().any(|c| c == candidate) {
        return candidate.to_string();
    }
    let mut n = 2;
    loop {
        let suffixed = format!("{candidate}_{n}");
        if !taken.iter().any(|c| c == &suffixed) {
            return suffixed;
        }
        n += 1;
    }
}
