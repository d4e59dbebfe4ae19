// crates/infra/src/persistence/file_reader.rs
use std::{fs, path::Path};

use build_version_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the whole file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }
}
