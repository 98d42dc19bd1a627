//! SPDX 2.x document model shared by the JSON, YAML and tag-value parsers.

use crate::sbom_merge::domain::{Record, Relationship, SbomDocument};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SpdxDocument {
    #[serde(default)]
    pub spdx_version: String,
    #[serde(rename = "SPDXID", default)]
    pub spdx_id: String,
    #[serde(default)]
    pub packages: Vec<SpdxPackage>,
    #[serde(default)]
    pub files: Vec<SpdxFile>,
    #[serde(default)]
    pub relationships: Vec<SpdxRelationship>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SpdxPackage {
    #[serde(rename = "SPDXID", default)]
    pub spdx_id: String,
    pub name: String,
    pub version_info: Option<String>,
    pub primary_package_purpose: Option<String>,
    pub supplier: Option<String>,
    pub originator: Option<String>,
    pub download_location: Option<String>,
    pub files_analyzed: Option<bool>,
    pub homepage: Option<String>,
    #[serde(default)]
    pub checksums: Vec<SpdxChecksum>,
    pub license_concluded: Option<String>,
    pub license_declared: Option<String>,
    pub copyright_text: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
    #[serde(default)]
    pub external_refs: Vec<SpdxExternalRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SpdxFile {
    #[serde(rename = "SPDXID", default)]
    pub spdx_id: String,
    pub file_name: String,
    #[serde(default)]
    pub file_types: Vec<String>,
    #[serde(default)]
    pub checksums: Vec<SpdxChecksum>,
    pub license_concluded: Option<String>,
    #[serde(default)]
    pub license_info_in_files: Vec<String>,
    pub copyright_text: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SpdxChecksum {
    pub algorithm: String,
    pub checksum_value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SpdxExternalRef {
    #[serde(default)]
    pub reference_category: String,
    pub reference_type: String,
    pub reference_locator: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SpdxRelationship {
    pub spdx_element_id: String,
    pub relationship_type: String,
    pub related_spdx_element: String,
}

impl SpdxDocument {
    /// Converts to engine records, resolving relationship element ids to
    /// entity names
    ///
    /// Ids that name no package or file (such as `SPDXRef-DOCUMENT`) are
    /// kept as they are.
    pub fn into_document(self) -> SbomDocument {
        let mut names: HashMap<String, String> = HashMap::new();
        for pkg in &self.packages {
            names.insert(pkg.spdx_id.clone(), pkg.name.clone());
        }
        for file in &self.files {
            names.insert(file.spdx_id.clone(), file.file_name.clone());
        }
        let resolve = |id: &str| names.get(id).cloned().unwrap_or_else(|| id.to_string());

        let relationships = self
            .relationships
            .iter()
            .map(|rel| {
                Relationship::new(
                    resolve(&rel.spdx_element_id),
                    rel.relationship_type.as_str(),
                    resolve(&rel.related_spdx_element),
                )
            })
            .collect();

        let packages = self.packages.into_iter().map(SpdxPackage::into_record).collect();
        let files = self.files.into_iter().map(SpdxFile::into_record).collect();

        SbomDocument::new(files, packages, relationships)
    }
}

impl SpdxPackage {
    fn into_record(self) -> Record {
        let mut record = Record::named(self.name);
        set_opt(&mut record, "id", non_empty(self.spdx_id));
        set_opt(&mut record, "version", self.version_info);
        set_opt(&mut record, "type", self.primary_package_purpose);
        if let Some(supplier) = self.supplier {
            let (kind, name) = split_actor(&supplier);
            set_opt(&mut record, "supplier_type", kind);
            record.set_value("supplier", name);
        }
        if let Some(originator) = self.originator {
            let (kind, name) = split_actor(&originator);
            set_opt(&mut record, "originator_type", kind);
            record.set_value("originator", name);
        }
        set_opt(&mut record, "downloadLocation", self.download_location);
        set_opt(
            &mut record,
            "filesAnalyzed",
            self.files_analyzed.map(|b| b.to_string()),
        );
        set_opt(&mut record, "homepage", self.homepage);
        set_opt(&mut record, "checksum", join_checksums(&self.checksums));
        set_opt(&mut record, "licenseConcluded", self.license_concluded);
        set_opt(&mut record, "licenseDeclared", self.license_declared);
        set_opt(&mut record, "copyrightText", self.copyright_text);
        set_opt(&mut record, "summary", self.summary);
        set_opt(&mut record, "description", self.description);
        set_opt(&mut record, "comment", self.comment);
        for ext in self.external_refs {
            if ext.reference_type == "purl" {
                record.set_value("purl", ext.reference_locator);
            } else {
                let category = if ext.reference_category.is_empty() {
                    "OTHER".to_string()
                } else {
                    ext.reference_category
                };
                record.set_value(
                    format!("externalRef.{}", ext.reference_type),
                    format!("{} {}", category, ext.reference_locator),
                );
            }
        }
        record
    }
}

impl SpdxFile {
    fn into_record(self) -> Record {
        let mut record = Record::named(self.file_name);
        set_opt(&mut record, "id", non_empty(self.spdx_id));
        if !self.file_types.is_empty() {
            record.set_value("fileType", self.file_types.join(", "));
        }
        set_opt(&mut record, "checksum", join_checksums(&self.checksums));
        set_opt(&mut record, "licenseConcluded", self.license_concluded);
        if !self.license_info_in_files.is_empty() {
            record.set_value("licenseInfoInFile", self.license_info_in_files.join(", "));
        }
        set_opt(&mut record, "copyrightText", self.copyright_text);
        set_opt(&mut record, "comment", self.comment);
        record
    }
}

fn set_opt(record: &mut Record, key: &str, value: Option<String>) {
    if let Some(value) = value {
        record.set_value(key, value);
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn join_checksums(checksums: &[SpdxChecksum]) -> Option<String> {
    if checksums.is_empty() {
        return None;
    }
    Some(
        checksums
            .iter()
            .map(|c| format!("{}: {}", c.algorithm, c.checksum_value))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Splits an SPDX actor such as `Organization: Acme Inc` into kind and name
///
/// `NOASSERTION` and values without a recognised kind keep no kind.
pub(super) fn split_actor(value: &str) -> (Option<String>, String) {
    match value.split_once(':') {
        Some((kind, name)) if matches!(kind.trim(), "Organization" | "Person" | "Tool") => {
            (Some(kind.trim().to_string()), name.trim().to_string())
        }
        _ => (None, value.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_actor() {
        assert_eq!(
            split_actor("Organization: Acme Inc"),
            (Some("Organization".to_string()), "Acme Inc".to_string())
        );
        assert_eq!(
            split_actor("Person: Jane Doe (jane@example.com)"),
            (Some("Person".to_string()), "Jane Doe (jane@example.com)".to_string())
        );
        assert_eq!(split_actor("NOASSERTION"), (None, "NOASSERTION".to_string()));
    }

    #[test]
    fn test_into_document_resolves_ids() {
        let doc = SpdxDocument {
            packages: vec![SpdxPackage {
                spdx_id: "SPDXRef-Package-1".to_string(),
                name: "libfoo".to_string(),
                version_info: Some("1.0".to_string()),
                ..Default::default()
            }],
            files: vec![SpdxFile {
                spdx_id: "SPDXRef-File-1".to_string(),
                file_name: "./src/foo.c".to_string(),
                ..Default::default()
            }],
            relationships: vec![
                SpdxRelationship {
                    spdx_element_id: "SPDXRef-Package-1".to_string(),
                    relationship_type: "CONTAINS".to_string(),
                    related_spdx_element: "SPDXRef-File-1".to_string(),
                },
                SpdxRelationship {
                    spdx_element_id: "SPDXRef-DOCUMENT".to_string(),
                    relationship_type: "DESCRIBES".to_string(),
                    related_spdx_element: "SPDXRef-Package-1".to_string(),
                },
            ],
            ..Default::default()
        };

        let document = doc.into_document();

        assert_eq!(document.packages[0].get("id"), Some("SPDXRef-Package-1"));
        assert_eq!(document.relationships[0].to_string(), "libfoo CONTAINS ./src/foo.c");
        assert_eq!(
            document.relationships[1].to_string(),
            "SPDXRef-DOCUMENT DESCRIBES libfoo"
        );
    }

    #[test]
    fn test_package_record_attributes() {
        let pkg = SpdxPackage {
            spdx_id: "SPDXRef-1".to_string(),
            name: "libfoo".to_string(),
            supplier: Some("Organization: Acme".to_string()),
            files_analyzed: Some(false),
            checksums: vec![SpdxChecksum {
                algorithm: "SHA1".to_string(),
                checksum_value: "abc".to_string(),
            }],
            external_refs: vec![SpdxExternalRef {
                reference_category: "PACKAGE-MANAGER".to_string(),
                reference_type: "purl".to_string(),
                reference_locator: "pkg:generic/libfoo@1.0".to_string(),
            }],
            ..Default::default()
        };

        let record = pkg.into_record();

        assert_eq!(record.get("supplier_type"), Some("Organization"));
        assert_eq!(record.get("supplier"), Some("Acme"));
        assert_eq!(record.get("filesAnalyzed"), Some("false"));
        assert_eq!(record.get("checksum"), Some("SHA1: abc"));
        assert_eq!(record.get("purl"), Some("pkg:generic/libfoo@1.0"));
        assert!(!record.contains("version"));
    }
}
