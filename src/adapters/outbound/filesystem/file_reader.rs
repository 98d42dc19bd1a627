use crate::ports::outbound::SbomReader;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading SBOM documents from the file system
///
/// This adapter implements the SbomReader port. Inputs are checked before
/// reading: symbolic links are rejected, as are non-regular files and
/// files above the size limit.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    /// Creates a reader with a custom size limit
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(SbomError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let size = validate_input_file(path, self.max_file_size).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;
        tracing::debug!(path = %path.display(), size, "reading SBOM");

        fs::read_to_string(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
