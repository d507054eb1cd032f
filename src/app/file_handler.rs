//! Checks on the input path before any output is produced.

use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Validates that the input path names an existing, non-directory file.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path does not exist or is a directory.
pub fn validate_input_file(input_path: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !input_path.exists() {
        let error_msg = format!("File not found: {}", input_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if input_path.is_dir() {
        let error_msg = format!("Path is a directory: {}", input_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    Ok(())
}
