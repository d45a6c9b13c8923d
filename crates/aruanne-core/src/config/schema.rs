use serde::{Deserialize, Serialize};

/// A keyword configuration: which section headings to look for in report
/// text, which heading's table is merged across documents, and which cell
/// marker disqualifies a column from the merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfigDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Regular expressions matching section headings. Order is enumeration
    /// order only; it does not imply priority.
    pub patterns: Vec<String>,
    /// Heading literal whose table is used for cross-document merge
    /// (e.g. "Bilanss", the balance sheet).
    pub target_keyword: String,
    /// Cells containing this substring (e.g. "Lisa", a note reference)
    /// disqualify their whole column from the merged output.
    pub footnote_marker: String,
}
