use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AruanneError {
    #[error("no document supplied")]
    NoInput,

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no table found for keyword '{keyword}' in {filename}")]
    TargetNotFound { keyword: String, filename: String },

    #[error("failed to load keyword config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid keyword config: {0}")]
    ConfigInvalid(String),

    #[error("CSV write failed: {0}")]
    Csv(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
