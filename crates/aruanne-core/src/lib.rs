pub mod combine;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod matcher;
pub mod model;
pub mod segment;

use config::KeywordConfig;
use error::AruanneError;
use extraction::{TableExtractor, TextExtractor};
use model::{LabeledTables, MergedTable, SourceDocument, Table};

/// Main API entry point: extract every table from a report and label each
/// with the section heading it belongs to.
///
/// Text and table extraction run independently over the same bytes; the
/// heading linkage is recovered purely lexically, by matching each
/// keyword-delimited text span against table contents. Sheets come back in
/// export order (reverse association order).
pub fn label_tables(
    pdf_bytes: &[u8],
    text_extractor: &dyn TextExtractor,
    table_extractor: &dyn TableExtractor,
    config: &KeywordConfig,
) -> Result<LabeledTables, AruanneError> {
    if pdf_bytes.is_empty() {
        return Err(AruanneError::NoInput);
    }

    let text = text_extractor.extract_text(pdf_bytes)?;
    let spans = segment::split_by_keywords(&text, config.patterns());

    let tables = table_extractor.extract_tables(pdf_bytes)?;
    let assoc = matcher::associate_tables(&spans, &tables);

    Ok(export::assemble_workbook(&assoc))
}

/// Extract the target-keyword table (the balance sheet, by default) from
/// each document and merge them into one wide dataset keyed on the first
/// column.
///
/// Documents are processed sequentially in submission order. Any document
/// lacking an association for the target keyword fails the whole operation;
/// there is no partial merge.
pub fn merge_documents(
    documents: &[SourceDocument],
    text_extractor: &dyn TextExtractor,
    table_extractor: &dyn TableExtractor,
    config: &KeywordConfig,
) -> Result<MergedTable, AruanneError> {
    if documents.is_empty() {
        return Err(AruanneError::NoInput);
    }

    let mut inputs: Vec<(String, Table)> = Vec::new();
    for doc in documents {
        let table = target_table(doc, text_extractor, table_extractor, config)?;
        let filtered = combine::filter_marked_columns(&table, config.footnote_marker());
        inputs.push((doc.filename.clone(), filtered));
    }

    Ok(combine::merge_tables(&inputs))
}

/// Find the table associated with the configured target keyword in one
/// document.
fn target_table(
    doc: &SourceDocument,
    text_extractor: &dyn TextExtractor,
    table_extractor: &dyn TableExtractor,
    config: &KeywordConfig,
) -> Result<Table, AruanneError> {
    if doc.bytes.is_empty() {
        return Err(AruanneError::NoInput);
    }

    let text = text_extractor.extract_text(&doc.bytes)?;
    let spans = segment::split_by_keywords(&text, config.patterns());

    let tables = table_extractor.extract_tables(&doc.bytes)?;
    let assoc = matcher::associate_tables(&spans, &tables);

    assoc
        .get(config.target_keyword())
        .map(|table| (*table).clone())
        .ok_or_else(|| AruanneError::TargetNotFound {
            keyword: config.target_keyword().to_string(),
            filename: doc.filename.clone(),
        })
}
