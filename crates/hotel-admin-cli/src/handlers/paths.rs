//! Paths command handler.
//!
//! Displays the resolved data locations for diagnostics.

use hotel_admin_core::ResolvedPaths;

use crate::error::CliError;

/// Execute the paths command.
///
/// Resolves and returns all paths in `key = value` format.
pub fn execute() -> Result<String, CliError> {
    let paths = ResolvedPaths::resolve()?;
    Ok(paths.to_string())
}
