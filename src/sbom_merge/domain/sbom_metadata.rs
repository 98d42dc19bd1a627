/// SbomMetadata value object describing the generated merge document
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    document_name: String,
    timestamp: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

impl SbomMetadata {
    pub fn new(
        document_name: String,
        timestamp: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
    ) -> Self {
        Self {
            document_name,
            timestamp,
            tool_name,
            tool_version,
            serial_number,
        }
    }

    /// Name of the output document (the synthetic document root)
    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// `urn:uuid:` serial, also used to build the SPDX document namespace
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn uuid(&self) -> &str {
        self.serial_number
            .strip_prefix("urn:uuid:")
            .unwrap_or(&self.serial_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbom_metadata_new() {
        let metadata = SbomMetadata::new(
            "SBOM-MERGETOOL-a-b".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
            "sbom-merge".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:12345".to_string(),
        );

        assert_eq!(metadata.document_name(), "SBOM-MERGETOOL-a-b");
        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "sbom-merge");
        assert_eq!(metadata.tool_version(), "0.1.0");
        assert_eq!(metadata.serial_number(), "urn:uuid:12345");
        assert_eq!(metadata.uuid(), "12345");
    }
}
