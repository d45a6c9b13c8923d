use aruanne_core::config::{builtin, load_config};
use aruanne_core::error::AruanneError;
use aruanne_core::extraction::grid::LayoutTableExtractor;
use aruanne_core::extraction::pdftotext::PdftotextExtractor;
use aruanne_core::model::SourceDocument;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_files: Vec<PathBuf>,
    out: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<(), AruanneError> {
    if input_files.is_empty() {
        return Err(AruanneError::NoInput);
    }

    let config = match config_file {
        Some(path) => load_config(&path)?,
        None => builtin::default_config()?,
    };

    let mut documents = Vec::new();
    for path in &input_files {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = std::fs::read(path)?;
        documents.push(SourceDocument { filename, bytes });
    }

    let text_extractor = PdftotextExtractor::new();
    let table_extractor = LayoutTableExtractor::new();

    let merged =
        aruanne_core::merge_documents(&documents, &text_extractor, &table_extractor, &config)?;

    match out {
        Some(path) => {
            let csv = output::csv::merged_to_string(&merged)?;
            std::fs::write(&path, csv)?;
            eprintln!(
                "Merged {} document(s) into {} ({} row(s), {} column(s))",
                documents.len(),
                path.display(),
                merged.rows.len(),
                merged.columns.len()
            );
        }
        None => {
            print!("{}", output::csv::merged_to_string(&merged)?);
        }
    }

    Ok(())
}
