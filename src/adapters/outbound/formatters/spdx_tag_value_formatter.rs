use super::spdx_document::{ChecksumOutput, FileOutput, PackageOutput, SpdxOutput};
use crate::ports::outbound::SbomFormatter;
use crate::sbom_merge::domain::{MergedDocument, SbomMetadata};
use crate::shared::Result;
use std::fmt::Write;

/// SpdxTagValueFormatter adapter for generating SPDX 2.3 tag-value format
///
/// This adapter implements the SbomFormatter port. Multi-line values are
/// wrapped in `<text>` tags.
pub struct SpdxTagValueFormatter;

impl SpdxTagValueFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render(&self, output: &SpdxOutput) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, "SPDXVersion: {}", output.spdx_version)?;
        writeln!(out, "DataLicense: {}", output.data_license)?;
        writeln!(out, "SPDXID: {}", output.spdx_id)?;
        writeln!(out, "DocumentName: {}", output.name)?;
        writeln!(out, "DocumentNamespace: {}", output.document_namespace)?;
        for creator in &output.creation_info.creators {
            writeln!(out, "Creator: {}", creator)?;
        }
        writeln!(out, "Created: {}", output.creation_info.created)?;

        for package in &output.packages {
            writeln!(out)?;
            self.render_package(&mut out, package)?;
        }

        for file in &output.files {
            writeln!(out)?;
            self.render_file(&mut out, file)?;
        }

        if !output.relationships.is_empty() {
            writeln!(out)?;
            for rel in &output.relationships {
                writeln!(
                    out,
                    "Relationship: {} {} {}",
                    rel.spdx_element_id, rel.relationship_type, rel.related_spdx_element
                )?;
            }
        }

        Ok(out)
    }

    fn render_package(
        &self,
        out: &mut String,
        package: &PackageOutput,
    ) -> std::result::Result<(), std::fmt::Error> {
        writeln!(out, "##### Package: {}", package.name)?;
        writeln!(out)?;
        writeln!(out, "PackageName: {}", package.name)?;
        writeln!(out, "SPDXID: {}", package.spdx_id)?;
        tag(out, "PackageVersion", package.version_info.as_deref())?;
        tag(out, "PrimaryPackagePurpose", package.primary_package_purpose.as_deref())?;
        tag(out, "PackageSupplier", package.supplier.as_deref())?;
        tag(out, "PackageOriginator", package.originator.as_deref())?;
        writeln!(out, "PackageDownloadLocation: {}", package.download_location)?;
        writeln!(out, "FilesAnalyzed: {}", package.files_analyzed)?;
        tag(out, "PackageHomePage", package.homepage.as_deref())?;
        checksum_tags(out, "PackageChecksum", &package.checksums)?;
        writeln!(out, "PackageLicenseConcluded: {}", package.license_concluded)?;
        writeln!(out, "PackageLicenseDeclared: {}", package.license_declared)?;
        tag(out, "PackageCopyrightText", Some(&package.copyright_text))?;
        tag(out, "PackageSummary", package.summary.as_deref())?;
        tag(out, "PackageDescription", package.description.as_deref())?;
        tag(out, "PackageComment", package.comment.as_deref())?;
        for ext in &package.external_refs {
            writeln!(
                out,
                "ExternalRef: {} {} {}",
                ext.reference_category, ext.reference_type, ext.reference_locator
            )?;
        }
        Ok(())
    }

    fn render_file(
        &self,
        out: &mut String,
        file: &FileOutput,
    ) -> std::result::Result<(), std::fmt::Error> {
        writeln!(out, "FileName: {}", file.file_name)?;
        writeln!(out, "SPDXID: {}", file.spdx_id)?;
        for file_type in &file.file_types {
            writeln!(out, "FileType: {}", file_type)?;
        }
        checksum_tags(out, "FileChecksum", &file.checksums)?;
        writeln!(out, "LicenseConcluded: {}", file.license_concluded)?;
        for license in &file.license_info_in_files {
            writeln!(out, "LicenseInfoInFile: {}", license)?;
        }
        tag(out, "FileCopyrightText", Some(&file.copyright_text))?;
        tag(out, "FileComment", file.comment.as_deref())?;
        Ok(())
    }
}

fn tag(out: &mut String, name: &str, value: Option<&str>) -> std::fmt::Result {
    match value {
        Some(value) if value.contains('\n') => writeln!(out, "{}: <text>{}</text>", name, value),
        Some(value) => writeln!(out, "{}: {}", name, value),
        None => Ok(()),
    }
}

fn checksum_tags(out: &mut String, name: &str, checksums: &[ChecksumOutput]) -> std::fmt::Result {
    for checksum in checksums {
        writeln!(out, "{}: {}: {}", name, checksum.algorithm, checksum.checksum_value)?;
    }
    Ok(())
}

impl Default for SpdxTagValueFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxTagValueFormatter {
    fn format(&self, document: &MergedDocument, metadata: &SbomMetadata) -> Result<String> {
        let output = SpdxOutput::build(document, metadata);
        self.render(&output)
            .map_err(|e| anyhow::anyhow!("Failed to render SPDX tag-value output: {}", e))
    }
}
