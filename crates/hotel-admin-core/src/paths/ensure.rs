//! Directory creation and verification utilities.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Ensure `path` is a writable directory, creating it and its parents if missing.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
    } else {
        fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    verify_writable(path)
}

/// Verify a directory is writable by creating and removing a probe file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let probe = path.join(".hotel_admin_write_test");
    fs::write(&probe, b"ok").map_err(|e| PathError::NotWritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let _ = fs::remove_file(&probe);
    Ok(())
}
