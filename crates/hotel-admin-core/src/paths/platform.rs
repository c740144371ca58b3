//! Platform-specific data root resolution.

use std::env;
use std::path::PathBuf;

use super::ensure::ensure_directory;
use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "HOTEL_ADMIN_DATA_DIR";

/// Get the root directory for application data (database).
///
/// Resolution order:
/// 1. `HOTEL_ADMIN_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/hotel-admin`)
pub fn data_root() -> Result<PathBuf, PathError> {
    data_root_from(env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

/// Resolve the data root from an explicit override.
///
/// The resolved directory is created if it doesn't exist.
pub fn data_root_from(override_dir: Option<PathBuf>) -> Result<PathBuf, PathError> {
    let root = match override_dir {
        Some(path) if path.as_os_str().is_empty() => return Err(PathError::EmptyPath),
        Some(path) => path,
        None => dirs::data_local_dir()
            .ok_or(PathError::NoDataDir)?
            .join("hotel-admin"),
    };

    ensure_directory(&root)?;
    Ok(root)
}
