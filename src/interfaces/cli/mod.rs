use std::path::PathBuf;

use crate::domain::error::{AppError, Result};

/// Obtain the CSV path from the command line.
///
/// Stands in for the interactive file chooser of the desktop app: the first
/// argument is the candidate source, validated before the pipeline runs.
pub fn select_csv_file() -> Result<PathBuf> {
    let arg = std::env::args_os().nth(1).ok_or_else(|| {
        AppError::Selection("No file chosen. Usage: notionflow <file.csv>".to_string())
    })?;

    validate_csv_path(PathBuf::from(arg))
}

/// Check extension and existence of a candidate source file.
pub fn validate_csv_path(path: PathBuf) -> Result<PathBuf> {
    let is_csv = path
        .extension()
        .map(|extension| extension == "csv")
        .unwrap_or(false);

    if !is_csv {
        return Err(AppError::Selection(
            "Please select a .csv file".to_string(),
        ));
    }

    if !path.is_file() {
        return Err(AppError::Selection(format!(
            "File not found: {}",
            path.display()
        )));
    }

    Ok(path)
}
