use aruanne_core::config::{builtin, load_config};
use aruanne_core::error::AruanneError;
use std::path::Path;

pub fn show() -> Result<(), AruanneError> {
    // Round-trip through the loader so `show` always prints a config that
    // actually validates.
    let config = builtin::default_config()?;
    println!("{}", serde_json::to_string_pretty(config.def())?);
    Ok(())
}

pub fn schema() -> Result<(), AruanneError> {
    println!("{}", SCHEMA_HELP.trim_start());
    println!("Built-in example:\n");
    println!("{}", builtin::default_config_json().trim_end());
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), AruanneError> {
    let config = load_config(file)?;
    println!(
        "{} is valid: {} pattern(s), target keyword '{}', footnote marker '{}'",
        file.display(),
        config.patterns().len(),
        config.target_keyword(),
        config.footnote_marker()
    );
    Ok(())
}

const SCHEMA_HELP: &str = r#"
Keyword config JSON fields:

  name             Display name of the configuration.
  description      Optional free-form description.
  patterns         Regular expressions matching section headings in report
                   text. Order is enumeration order only. Each table found
                   in the document is attributed to the heading whose
                   following text contains all of the table's tokens.
  target_keyword   Heading literal whose table is merged across documents
                   by `aruanne merge` (the balance sheet, typically).
  footnote_marker  Cells containing this substring disqualify their whole
                   column from the merged output.
"#;
