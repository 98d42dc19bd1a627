use crate::shared::Result;
use std::path::Path;

/// SbomReader port for reading raw SBOM documents
///
/// This port abstracts the file system operations needed to load an
/// input document before it is handed to a parser.
pub trait SbomReader {
    /// Reads the SBOM document at `path`
    ///
    /// # Returns
    /// The raw content of the document as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The file fails the security checks (symlink, size limit)
    fn read_sbom(&self, path: &Path) -> Result<String>;
}
