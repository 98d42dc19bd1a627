use super::spdx_document::SpdxOutput;
use crate::ports::outbound::SbomFormatter;
use crate::sbom_merge::domain::{MergedDocument, SbomMetadata};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// SpdxJsonFormatter adapter for generating SPDX 2.3 JSON format
///
/// This adapter implements the SbomFormatter port for SPDX JSON.
pub struct SpdxJsonFormatter;

impl SpdxJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxJsonFormatter {
    fn format(&self, document: &MergedDocument, metadata: &SbomMetadata) -> Result<String> {
        let output = SpdxOutput::build(document, metadata);
        serde_json::to_string_pretty(&output).map_err(|e| {
            SbomError::OutputGenerationError {
                format: "SPDX JSON".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// SpdxYamlFormatter adapter for generating SPDX 2.3 YAML format
pub struct SpdxYamlFormatter;

impl SpdxYamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxYamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxYamlFormatter {
    fn format(&self, document: &MergedDocument, metadata: &SbomMetadata) -> Result<String> {
        let output = SpdxOutput::build(document, metadata);
        serde_yaml_ng::to_string(&output).map_err(|e| {
            SbomError::OutputGenerationError {
                format: "SPDX YAML".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::spdx_document::test_support::{document, metadata};
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_structure() {
        let json = SpdxJsonFormatter::new()
            .format(&document(), &metadata())
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["spdxVersion"], "SPDX-2.3");
        assert_eq!(value["SPDXID"], "SPDXRef-DOCUMENT");
        assert_eq!(value["dataLicense"], "CC0-1.0");
        assert_eq!(value["creationInfo"]["created"], "2024-01-01T00:00:00Z");
        assert_eq!(value["packages"].as_array().unwrap().len(), 2);
        assert_eq!(value["packages"][0]["primaryPackagePurpose"], "APPLICATION");
        assert_eq!(value["packages"][1]["versionInfo"], "1.0");
        assert_eq!(value["files"][0]["fileName"], "./src/a.c");
        assert_eq!(value["relationships"][0]["relationshipType"], "DESCRIBES");
    }

    #[test]
    fn test_json_key_order_starts_with_header() {
        let json = SpdxJsonFormatter::new()
            .format(&document(), &metadata())
            .unwrap();
        let spdx_version = json.find("\"spdxVersion\"").unwrap();
        let packages = json.find("\"packages\"").unwrap();
        assert!(spdx_version < packages);
    }

    #[test]
    fn test_yaml_structure() {
        let yaml = SpdxYamlFormatter::new()
            .format(&document(), &metadata())
            .unwrap();

        assert!(yaml.contains("spdxVersion: SPDX-2.3"));
        assert!(yaml.contains("SPDXID: SPDXRef-DOCUMENT"));
        assert!(yaml.contains("name: libA"));
        assert!(yaml.contains("relationshipType: CONTAINS"));
    }
}
