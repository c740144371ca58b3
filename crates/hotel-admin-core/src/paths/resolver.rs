//! The paths a server started now would use, as printed by `hotel-admin paths`.

use std::path::PathBuf;

use super::{PathError, data_root, database_path_in};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub data_root: PathBuf,
    pub database_path: PathBuf,
}

impl ResolvedPaths {
    /// Read the environment once and derive both paths from the same root.
    pub fn resolve() -> Result<Self, PathError> {
        let root = data_root()?;
        Ok(Self {
            database_path: database_path_in(&root)?,
            data_root: root,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        write!(f, "database_path = {}", self.database_path.display())
    }
}
