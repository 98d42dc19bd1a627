//! SPDX 2.3 output model shared by the JSON, YAML and tag-value formatters.

use crate::sbom_merge::domain::{MergedDocument, Record, SbomMetadata, NOASSERTION};
use serde::Serialize;
use std::collections::HashMap;

pub(super) const SPDX_VERSION: &str = "SPDX-2.3";
pub(super) const DATA_LICENSE: &str = "CC0-1.0";
pub(super) const DOCUMENT_ID: &str = "SPDXRef-DOCUMENT";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SpdxOutput {
    pub spdx_version: String,
    pub data_license: String,
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub document_namespace: String,
    pub creation_info: CreationInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<PackageOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipOutput>,
}

#[derive(Debug, Serialize)]
pub(super) struct CreationInfo {
    pub created: String,
    pub creators: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PackageOutput {
    pub name: String,
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_package_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originator: Option<String>,
    pub download_location: String,
    pub files_analyzed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checksums: Vec<ChecksumOutput>,
    pub license_concluded: String,
    pub license_declared: String,
    pub copyright_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRefOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct FileOutput {
    pub file_name: String,
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_types: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checksums: Vec<ChecksumOutput>,
    pub license_concluded: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub license_info_in_files: Vec<String>,
    pub copyright_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ChecksumOutput {
    pub algorithm: String,
    pub checksum_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ExternalRefOutput {
    pub reference_category: String,
    pub reference_type: String,
    pub reference_locator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RelationshipOutput {
    pub spdx_element_id: String,
    pub relationship_type: String,
    pub related_spdx_element: String,
}

/// SPDX element ids of a merged document
///
/// Ids follow entity order. The synthetic document root maps to
/// `SPDXRef-DOCUMENT`. A name shared by a file and a package resolves to
/// the file, and a name shared by several packages to the first of them.
pub(super) struct SpdxIds {
    files: Vec<String>,
    packages: Vec<String>,
    by_name: HashMap<String, String>,
    document_root: String,
}

impl SpdxIds {
    pub fn assign(document: &MergedDocument) -> Self {
        let files: Vec<String> = document
            .files
            .keys()
            .enumerate()
            .map(|(i, name)| format!("SPDXRef-File-{}-{}", i + 1, sanitize(name)))
            .collect();
        let packages: Vec<String> = document
            .packages
            .keys()
            .enumerate()
            .map(|(i, key)| format!("SPDXRef-Package-{}-{}", i + 1, sanitize(&key.name)))
            .collect();

        let mut by_name = HashMap::new();
        for (key, id) in document.packages.keys().zip(&packages) {
            by_name.entry(key.name.clone()).or_insert_with(|| id.clone());
        }
        for (name, id) in document.files.keys().zip(&files) {
            by_name.insert(name.clone(), id.clone());
        }

        Self {
            files,
            packages,
            by_name,
            document_root: document.document_root.clone(),
        }
    }

    pub fn file(&self, index: usize) -> &str {
        &self.files[index]
    }

    pub fn package(&self, index: usize) -> &str {
        &self.packages[index]
    }

    pub fn resolve(&self, name: &str) -> String {
        if name == self.document_root {
            return DOCUMENT_ID.to_string();
        }
        self.by_name
            .get(name)
            .cloned()
            .unwrap_or_else(|| format!("SPDXRef-{}", sanitize(name)))
    }
}

/// SPDX ids allow letters, digits, `.` and `-` only
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

impl SpdxOutput {
    pub fn build(document: &MergedDocument, metadata: &SbomMetadata) -> Self {
        let ids = SpdxIds::assign(document);

        let packages = document
            .packages
            .values()
            .enumerate()
            .map(|(i, record)| package_output(record, ids.package(i)))
            .collect();
        let files = document
            .files
            .values()
            .enumerate()
            .map(|(i, record)| file_output(record, ids.file(i)))
            .collect();
        let relationships = document
            .relationships
            .iter()
            .map(|rel| RelationshipOutput {
                spdx_element_id: ids.resolve(rel.source()),
                relationship_type: rel.relationship_type().to_string(),
                related_spdx_element: ids.resolve(rel.target()),
            })
            .collect();

        Self {
            spdx_version: SPDX_VERSION.to_string(),
            data_license: DATA_LICENSE.to_string(),
            spdx_id: DOCUMENT_ID.to_string(),
            name: metadata.document_name().to_string(),
            document_namespace: format!(
                "https://spdx.org/spdxdocs/{}-{}",
                metadata.document_name(),
                metadata.uuid()
            ),
            creation_info: CreationInfo {
                created: metadata.timestamp().to_string(),
                creators: vec![format!(
                    "Tool: {}-{}",
                    metadata.tool_name(),
                    metadata.tool_version()
                )],
            },
            packages,
            files,
            relationships,
        }
    }
}

fn owned(record: &Record, key: &str) -> Option<String> {
    record.get(key).map(String::from)
}

fn or_noassertion(record: &Record, key: &str) -> String {
    record.get(key).unwrap_or(NOASSERTION).to_string()
}

/// Rebuilds an SPDX actor from its kind and name attributes
fn actor(record: &Record, kind_key: &str, name_key: &str) -> Option<String> {
    let name = record.get(name_key)?;
    match record.get(kind_key) {
        Some(kind) if name != NOASSERTION && matches!(kind, "Organization" | "Person" | "Tool") => {
            Some(format!("{}: {}", kind, name))
        }
        _ => Some(name.to_string()),
    }
}

/// Splits `SHA1: abc, SHA256: def` into checksums
pub(super) fn checksums(value: Option<&str>) -> Vec<ChecksumOutput> {
    value
        .map(|v| {
            v.split(", ")
                .filter_map(|entry| entry.split_once(':'))
                .map(|(alg, sum)| ChecksumOutput {
                    algorithm: alg.trim().to_string(),
                    checksum_value: sum.trim().to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| v.split(", ").map(String::from).collect())
        .unwrap_or_default()
}

fn package_output(record: &Record, spdx_id: &str) -> PackageOutput {
    let mut external_refs = Vec::new();
    if let Some(purl) = record.get("purl") {
        external_refs.push(ExternalRefOutput {
            reference_category: "PACKAGE-MANAGER".to_string(),
            reference_type: "purl".to_string(),
            reference_locator: purl.to_string(),
        });
    }
    for (key, value) in record.iter() {
        let (Some(kind), Some(value)) = (key.strip_prefix("externalRef."), value) else {
            continue;
        };
        if let Some((category, locator)) = value.split_once(' ') {
            external_refs.push(ExternalRefOutput {
                reference_category: category.to_string(),
                reference_type: kind.to_string(),
                reference_locator: locator.to_string(),
            });
        }
    }

    PackageOutput {
        name: record.name().to_string(),
        spdx_id: spdx_id.to_string(),
        version_info: owned(record, "version"),
        primary_package_purpose: record.get("type").map(|t| t.to_uppercase().replace('_', "-")),
        supplier: actor(record, "supplier_type", "supplier"),
        originator: actor(record, "originator_type", "originator"),
        download_location: or_noassertion(record, "downloadLocation"),
        files_analyzed: record
            .get("filesAnalyzed")
            .is_some_and(|v| v.eq_ignore_ascii_case("true")),
        homepage: owned(record, "homepage"),
        checksums: checksums(record.get("checksum")),
        license_concluded: or_noassertion(record, "licenseConcluded"),
        license_declared: or_noassertion(record, "licenseDeclared"),
        copyright_text: or_noassertion(record, "copyrightText"),
        summary: owned(record, "summary"),
        description: owned(record, "description"),
        comment: owned(record, "comment"),
        external_refs,
    }
}

fn file_output(record: &Record, spdx_id: &str) -> FileOutput {
    FileOutput {
        file_name: record.name().to_string(),
        spdx_id: spdx_id.to_string(),
        file_types: split_list(record.get("fileType")),
        checksums: checksums(record.get("checksum")),
        license_concluded: or_noassertion(record, "licenseConcluded"),
        license_info_in_files: split_list(record.get("licenseInfoInFile")),
        copyright_text: or_noassertion(record, "copyrightText"),
        comment: owned(record, "comment"),
    }
}
