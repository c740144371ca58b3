//! Where the server keeps its data.
//!
//! The data root comes from `HOTEL_ADMIN_DATA_DIR` when set, otherwise the
//! platform data directory. The `SQLite` file lives under it unless the
//! caller passes an explicit path. Nothing here prompts or prints.

mod database;
mod ensure;
mod error;
mod platform;
mod resolver;

pub use database::{DATABASE_FILE_NAME, database_path, database_path_in};
pub use ensure::{ensure_directory, verify_writable};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, data_root_from};
pub use resolver::ResolvedPaths;
