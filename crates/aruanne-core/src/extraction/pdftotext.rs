use crate::error::AruanneError;
use crate::extraction::TextExtractor;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Text extraction backend using pdftotext (from poppler-utils).
///
/// Runs pdftotext in raw reading-order mode; the output is one linear text
/// stream with pages concatenated in document order.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, AruanneError> {
        let tmpfile = write_temp_pdf(pdf_bytes)?;
        let text = run_pdftotext(tmpfile.path(), &[])?;
        // pdftotext separates pages with form feeds; the segmenter wants
        // one linear stream.
        Ok(text.replace('\x0c', "\n"))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Write uploaded PDF bytes to a transient temp file.
///
/// The file is removed when the returned handle drops, at the end of the
/// request that created it.
pub(crate) fn write_temp_pdf(pdf_bytes: &[u8]) -> Result<tempfile::NamedTempFile, AruanneError> {
    let mut tmpfile =
        tempfile::NamedTempFile::new().map_err(|e| AruanneError::Extraction(e.to_string()))?;
    tmpfile
        .write_all(pdf_bytes)
        .map_err(|e| AruanneError::Extraction(e.to_string()))?;
    Ok(tmpfile)
}

/// Run pdftotext on a file with the given extra flags, output to stdout.
pub(crate) fn run_pdftotext(pdf_path: &Path, flags: &[&str]) -> Result<String, AruanneError> {
    let output = Command::new("pdftotext")
        .args(flags)
        .arg(pdf_path)
        .arg("-") // output to stdout
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AruanneError::PdftotextNotFound
            } else {
                AruanneError::Extraction(format!("pdftotext failed: {}", e))
            }
        })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(AruanneError::PdftotextFailed { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
