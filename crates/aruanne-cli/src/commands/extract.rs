use aruanne_core::config::{builtin, load_config};
use aruanne_core::error::AruanneError;
use aruanne_core::extraction::grid::LayoutTableExtractor;
use aruanne_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    out_dir: PathBuf,
    output_format: &str,
    config_file: Option<PathBuf>,
) -> Result<(), AruanneError> {
    let config = match config_file {
        Some(path) => load_config(&path)?,
        None => builtin::default_config()?,
    };

    let pdf_bytes = std::fs::read(&input_file)?;
    let text_extractor = PdftotextExtractor::new();
    let table_extractor = LayoutTableExtractor::new();

    let workbook =
        aruanne_core::label_tables(&pdf_bytes, &text_extractor, &table_extractor, &config)?;

    match output_format {
        "json" => output::json::print(&workbook)?,
        _ => {
            output::csv::write_sheets(&out_dir, &workbook)?;
            eprintln!(
                "Labeled {} table(s) from {}, written to {}/",
                workbook.sheets.len(),
                input_file.display(),
                out_dir.display()
            );
            for sheet in &workbook.sheets {
                eprintln!(
                    "  {} ({} row(s))",
                    sheet.keyword,
                    sheet.table.rows.len()
                );
            }
        }
    }

    Ok(())
}
