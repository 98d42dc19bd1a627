use crate::sbom_merge::domain::SbomMetadata;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Name reported as the creating tool in generated documents
pub const TOOL_NAME: &str = "sbom-merge";

/// MetadataGenerator service for generating output document metadata
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh serial number
    ///
    /// # Arguments
    /// * `document_name` - Name of the merged document (the synthetic document root)
    /// * `tool_name` - Name of the tool generating the SBOM
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(
        document_name: &str,
        tool_name: &str,
        tool_version: &str,
    ) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        SbomMetadata::new(
            document_name.to_string(),
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
        )
    }

    /// Generates metadata with this tool's name and compile-time version
    pub fn generate_default_metadata(document_name: &str) -> SbomMetadata {
        Self::generate_metadata(document_name, TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
