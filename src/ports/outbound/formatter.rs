use crate::sbom_merge::domain::{MergedDocument, SbomMetadata};
use crate::shared::Result;

/// SbomFormatter port for serialising the merged document
///
/// This port abstracts the generation of the different output dialects
/// (SPDX tag-value, SPDX JSON/YAML, CycloneDX JSON).
pub trait SbomFormatter {
    /// Formats the merged document
    ///
    /// # Arguments
    /// * `document` - The merged files, packages and relationships
    /// * `metadata` - Document name, timestamp, tool and serial number
    ///
    /// # Returns
    /// Formatted SBOM content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, document: &MergedDocument, metadata: &SbomMetadata) -> Result<String>;
}
