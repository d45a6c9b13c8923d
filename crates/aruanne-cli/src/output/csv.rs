use aruanne_core::error::AruanneError;
use aruanne_core::model::{LabeledTables, MergedTable, Table};
use csv::WriterBuilder;
use std::path::Path;

/// Write one CSV per labeled table into `dir`.
///
/// Filenames are numbered in export order (`01_Kasumiaruanne.csv`, ...) so
/// the sheet ordering contract survives the trip through a directory
/// listing. Grids are written as-is, no header row or index column.
pub fn write_sheets(dir: &Path, workbook: &LabeledTables) -> Result<(), AruanneError> {
    std::fs::create_dir_all(dir)?;

    for (i, sheet) in workbook.sheets.iter().enumerate() {
        let filename = format!("{:02}_{}.csv", i + 1, sanitize(&sheet.keyword));
        write_grid(&dir.join(filename), &sheet.table)?;
    }

    Ok(())
}

fn write_grid(path: &Path, table: &Table) -> Result<(), AruanneError> {
    // Rows of one grid are not required to be equally wide.
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AruanneError::Csv(e.to_string()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| AruanneError::Csv(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the merged dataset as one CSV stream: header row of column
/// names, then data rows with join nulls as empty cells.
pub fn merged_to_string(merged: &MergedTable) -> Result<String, AruanneError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::<u8>::new());
    writer
        .write_record(&merged.columns)
        .map_err(|e| AruanneError::Csv(e.to_string()))?;
    for row in &merged.rows {
        let record: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
        writer
            .write_record(&record)
            .map_err(|e| AruanneError::Csv(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| AruanneError::Csv(e.to_string()))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| AruanneError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AruanneError::Csv(e.to_string()))
}

/// Keep keyword labels filesystem-safe.
fn sanitize(keyword: &str) -> String {
    keyword
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_to_string_renders_nulls_as_empty_cells() {
        let merged = MergedTable {
            columns: vec!["Key".into(), "a_V".into(), "b_V".into()],
            rows: vec![
                vec![Some("x".into()), Some("1".into()), None],
                vec![Some("y".into()), None, Some("2".into())],
            ],
        };
        let csv = merged_to_string(&merged).unwrap();
        assert_eq!(csv, "Key,a_V,b_V\nx,1,\ny,,2\n");
    }

    #[test]
    fn test_sanitize_replaces_separators() {
        assert_eq!(sanitize("Rahavoogude aruanne"), "Rahavoogude_aruanne");
        assert_eq!(sanitize("a/b"), "a_b");
    }
}
