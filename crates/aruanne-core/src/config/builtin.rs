use crate::config::KeywordConfig;
use crate::error::AruanneError;

const DEFAULT_KEYWORDS_JSON: &str = include_str!("../../../../config/keywords.json");

/// Load the built-in keyword configuration for Estonian annual reports.
pub fn default_config() -> Result<KeywordConfig, AruanneError> {
    crate::config::parse_config_str(DEFAULT_KEYWORDS_JSON)
}

/// The built-in configuration as raw JSON, for `keywords show`.
pub fn default_config_json() -> &'static str {
    DEFAULT_KEYWORDS_JSON
}
