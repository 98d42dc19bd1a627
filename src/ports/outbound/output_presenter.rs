use crate::shared::Result;

/// OutputPresenter port for presenting the generated document
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the merged SBOM is written.
pub trait OutputPresenter {
    /// Presents the formatted SBOM content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination fails the security checks
    fn present(&self, content: &str) -> Result<()>;
}
