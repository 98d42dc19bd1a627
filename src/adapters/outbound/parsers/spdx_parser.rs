use super::spdx_model::{
    SpdxChecksum, SpdxDocument, SpdxExternalRef, SpdxFile, SpdxPackage, SpdxRelationship,
};
use crate::ports::outbound::{ParsedSbom, SbomParser};
use crate::sbom_merge::domain::DocumentType;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// SpdxParser adapter for SPDX 2.x documents
///
/// Handles the JSON, YAML and tag-value encodings. The encoding is picked
/// from the content itself.
pub struct SpdxParser;

impl SpdxParser {
    pub fn new() -> Self {
        Self
    }

    /// Detects which SPDX encoding `content` uses, if any
    pub fn detect_type(content: &str) -> Option<DocumentType> {
        let trimmed = content.trim_start();
        if trimmed.starts_with('{') {
            return trimmed
                .contains("\"spdxVersion\"")
                .then_some(DocumentType::SpdxJson);
        }
        if trimmed
            .lines()
            .any(|line| line.trim_start().starts_with("SPDXVersion:"))
        {
            return Some(DocumentType::SpdxTagValue);
        }
        if trimmed
            .lines()
            .any(|line| line.trim_start().starts_with("spdxVersion:"))
        {
            return Some(DocumentType::SpdxYaml);
        }
        None
    }

    fn parse_json(content: &str) -> Result<SpdxDocument> {
        serde_json::from_str(content).map_err(|e| {
            SbomError::Validation {
                message: format!("invalid SPDX JSON: {}", e),
            }
            .into()
        })
    }

    fn parse_yaml(content: &str) -> Result<SpdxDocument> {
        serde_yaml_ng::from_str(content).map_err(|e| {
            SbomError::Validation {
                message: format!("invalid SPDX YAML: {}", e),
            }
            .into()
        })
    }
}

impl Default for SpdxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomParser for SpdxParser {
    fn detect(&self, content: &str) -> bool {
        Self::detect_type(content).is_some()
    }

    fn parse(&self, content: &str) -> Result<ParsedSbom> {
        let document_type = Self::detect_type(content).ok_or_else(|| SbomError::Validation {
            message: "content is not an SPDX document".to_string(),
        })?;

        let spdx = match document_type {
            DocumentType::SpdxJson => Self::parse_json(content)?,
            DocumentType::SpdxYaml => Self::parse_yaml(content)?,
            _ => TagValueReader::new().read(content),
        };

        tracing::debug!(
            id = %spdx.spdx_id,
            version = %spdx.spdx_version,
            packages = spdx.packages.len(),
            files = spdx.files.len(),
            relationships = spdx.relationships.len(),
            "parsed SPDX document"
        );

        Ok(ParsedSbom::new(spdx.into_document(), document_type))
    }

    fn format_name(&self) -> &'static str {
        "SPDX"
    }
}

/// Element a tag-value line currently applies to
enum Current {
    Document,
    Package(SpdxPackage),
    File(SpdxFile),
}

/// Line-oriented reader for the SPDX tag-value encoding
///
/// Tags that do not map to a record attribute are skipped. `<text>` values
/// may span several lines.
struct TagValueReader {
    document: SpdxDocument,
    current: Current,
}

impl TagValueReader {
    fn new() -> Self {
        Self {
            document: SpdxDocument::default(),
            current: Current::Document,
        }
    }

    fn read(mut self, content: &str) -> SpdxDocument {
        let mut lines = content.lines();
        while let Some(line) = lines.next() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((tag, value)) = line.split_once(':') else {
                continue;
            };
            let mut value = value.trim().to_string();
            if value.starts_with("<text>") && !value.contains("</text>") {
                for next in lines.by_ref() {
                    value.push('\n');
                    value.push_str(next);
                    if next.contains("</text>") {
                        break;
                    }
                }
            }
            self.apply(tag.trim(), strip_text(&value));
        }
        self.finish_current();
        self.document
    }

    fn finish_current(&mut self) {
        match std::mem::replace(&mut self.current, Current::Document) {
            Current::Package(pkg) => self.document.packages.push(pkg),
            Current::File(file) => self.document.files.push(file),
            Current::Document => {}
        }
    }

    fn apply(&mut self, tag: &str, value: String) {
        match tag {
            "SPDXVersion" => self.document.spdx_version = value,
            "PackageName" => {
                self.finish_current();
                self.current = Current::Package(SpdxPackage {
                    name: value,
                    ..Default::default()
                });
            }
            "FileName" => {
                self.finish_current();
                self.current = Current::File(SpdxFile {
                    file_name: value,
                    ..Default::default()
                });
            }
            "Relationship" => {
                let parts: Vec<&str> = value.split_whitespace().collect();
                if let [source, kind, target] = parts.as_slice() {
                    self.document.relationships.push(SpdxRelationship {
                        spdx_element_id: source.to_string(),
                        relationship_type: kind.to_string(),
                        related_spdx_element: target.to_string(),
                    });
                }
            }
            _ => match &mut self.current {
                Current::Document => {
                    if tag == "SPDXID" {
                        self.document.spdx_id = value;
                    }
                }
                Current::Package(pkg) => apply_package_tag(pkg, tag, value),
                Current::File(file) => apply_file_tag(file, tag, value),
            },
        }
    }
}

fn apply_package_tag(pkg: &mut SpdxPackage, tag: &str, value: String) {
    match tag {
        "SPDXID" => pkg.spdx_id = value,
        "PackageVersion" => pkg.version_info = Some(value),
        "PrimaryPackagePurpose" => pkg.primary_package_purpose = Some(value),
        "PackageSupplier" => pkg.supplier = Some(value),
        "PackageOriginator" => pkg.originator = Some(value),
        "PackageDownloadLocation" => pkg.download_location = Some(value),
        "FilesAnalyzed" => pkg.files_analyzed = Some(value.eq_ignore_ascii_case("true")),
        "PackageHomePage" => pkg.homepage = Some(value),
        "PackageChecksum" => {
            if let Some(checksum) = parse_checksum(&value) {
                pkg.checksums.push(checksum);
            }
        }
        "PackageLicenseConcluded" => pkg.license_concluded = Some(value),
        "PackageLicenseDeclared" => pkg.license_declared = Some(value),
        "PackageCopyrightText" => pkg.copyright_text = Some(value),
        "PackageSummary" => pkg.summary = Some(value),
        "PackageDescription" => pkg.description = Some(value),
        "PackageComment" => pkg.comment = Some(value),
        "ExternalRef" => {
            let parts: Vec<&str> = value.split_whitespace().collect();
            if let [category, kind, locator] = parts.as_slice() {
                pkg.external_refs.push(SpdxExternalRef {
                    reference_category: category.to_string(),
                    reference_type: kind.to_string(),
                    reference_locator: locator.to_string(),
                });
            }
        }
        _ => {}
    }
}

fn apply_file_tag(file: &mut SpdxFile, tag: &str, value: String) {
    match tag {
        "SPDXID" => file.spdx_id = value,
        "FileType" => file.file_types.push(value),
        "FileChecksum" => {
            if let Some(checksum) = parse_checksum(&value) {
                file.checksums.push(checksum);
            }
        }
        "LicenseConcluded" => file.license_concluded = Some(value),
        "LicenseInfoInFile" => file.license_info_in_files.push(value),
        "FileCopyrightText" => file.copyright_text = Some(value),
        "FileComment" => file.comment = Some(value),
        _ => {}
    }
}

/// Parses `SHA1: 85ed0817af83a24ad8da68c2b5094de69833983c`
fn parse_checksum(value: &str) -> Option<SpdxChecksum> {
    let (algorithm, checksum) = value.split_once(':')?;
    Some(SpdxChecksum {
        algorithm: algorithm.trim().to_string(),
        checksum_value: checksum.trim().to_string(),
    })
}

fn strip_text(value: &str) -> String {
    match value
        .strip_prefix("<text>")
        .and_then(|v| v.strip_suffix("</text>"))
    {
        Some(inner) => inner.to_string(),
        None => value.to_string(),
    }
}
