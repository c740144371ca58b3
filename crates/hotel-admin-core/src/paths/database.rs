//! Database path resolution.
//!
//! Provides the canonical path to the hotel-admin `SQLite` database file.

use std::path::{Path, PathBuf};

use super::ensure::ensure_directory;
use super::error::PathError;
use super::platform::data_root;

/// File name of the database inside `<data root>/data`.
pub const DATABASE_FILE_NAME: &str = "hotel-admin.db";

/// Get the path to the hotel-admin database file.
///
/// The `data/` subdirectory is created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Database path under an explicit data root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_directory(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}
