use crate::application::dto::{MergeRequest, MergeResponse};
use crate::shared::Result;

/// SbomMergePort - Inbound port for the merge use case
///
/// This port defines the interface that external adapters (CLI, tests, etc.)
/// use to trigger a merge. It represents the application's public API.
pub trait SbomMergePort {
    /// Merges the two SBOM documents named in the request
    ///
    /// # Errors
    /// Returns an error if:
    /// - Both inputs are the same document or an input is missing
    /// - An input cannot be read or parsed
    fn merge_sboms(&self, request: MergeRequest) -> Result<MergeResponse>;
}
