pub mod grid;
pub mod pdftotext;

use crate::error::AruanneError;
use crate::model::Table;

/// Trait for text extraction backends.
///
/// Returns the document's full linear text, page order preserved. No layout
/// or position metadata is carried; everything downstream is purely lexical.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, AruanneError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for table grid extraction backends.
///
/// Returns tables in document order as plain string grids. The extractor
/// knows nothing about which heading introduced each table; that linkage is
/// recovered by the matcher.
pub trait TableExtractor: Send + Sync {
    fn extract_tables(&self, pdf_bytes: &[u8]) -> Result<Vec<Table>, AruanneError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
