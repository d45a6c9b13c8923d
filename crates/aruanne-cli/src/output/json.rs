use aruanne_core::error::AruanneError;
use aruanne_core::model::LabeledTables;

pub fn print(workbook: &LabeledTables) -> Result<(), AruanneError> {
    let json = serde_json::to_string_pretty(workbook)?;
    println!("{json}");
    Ok(())
}
