pub mod builtin;
pub mod schema;

use crate::error::AruanneError;
use regex::Regex;
use schema::KeywordConfigDef;
use std::path::Path;

/// A validated keyword configuration with all patterns compiled.
///
/// Loaded once at startup and injected into the core; never mutated per
/// request.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    def: KeywordConfigDef,
    patterns: Vec<Regex>,
}

impl KeywordConfig {
    /// Compile a configuration definition, validating it in the process.
    pub fn compile(def: KeywordConfigDef) -> Result<KeywordConfig, AruanneError> {
        validate_config(&def)?;
        let patterns = def
            .patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    AruanneError::ConfigInvalid(format!("pattern '{}' does not compile: {}", p, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(KeywordConfig { def, patterns })
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn target_keyword(&self) -> &str {
        &self.def.target_keyword
    }

    pub fn footnote_marker(&self) -> &str {
        &self.def.footnote_marker
    }

    pub fn def(&self) -> &KeywordConfigDef {
        &self.def
    }
}

/// Load a keyword configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<KeywordConfig, AruanneError> {
    let content = std::fs::read_to_string(path).map_err(|e| AruanneError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def: KeywordConfigDef =
        serde_json::from_str(&content).map_err(|e| AruanneError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    KeywordConfig::compile(def)
}

/// Parse a keyword configuration from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<KeywordConfig, AruanneError> {
    let def: KeywordConfigDef = serde_json::from_str(json).map_err(AruanneError::Json)?;
    KeywordConfig::compile(def)
}

/// Validate that a configuration definition is well-formed.
pub fn validate_config(def: &KeywordConfigDef) -> Result<(), AruanneError> {
    if def.patterns.is_empty() {
        return Err(AruanneError::ConfigInvalid(
            "patterns must not be empty".into(),
        ));
    }

    for pattern in &def.patterns {
        if pattern.is_empty() {
            return Err(AruanneError::ConfigInvalid(
                "patterns must not contain empty strings".into(),
            ));
        }
    }

    if def.target_keyword.is_empty() {
        return Err(AruanneError::ConfigInvalid(
            "target_keyword must not be empty".into(),
        ));
    }

    if def.footnote_marker.is_empty() {
        return Err(AruanneError::ConfigInvalid(
            "footnote_marker must not be empty".into(),
        ));
    }

    Ok(())
}
