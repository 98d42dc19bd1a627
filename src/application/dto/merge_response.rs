use crate::sbom_merge::domain::{DocumentType, MergeReport, MergedDocument, SbomMetadata};
use crate::shared::error::ExitCode;

/// MergeResponse - Internal response DTO from the merge use case
///
/// Carries the merged document for a formatter plus what the engine decided.
#[derive(Debug, Clone)]
pub struct MergeResponse {
    pub document: MergedDocument,
    pub report: MergeReport,
    /// Output document metadata (name, timestamp, tool info, serial number)
    pub metadata: SbomMetadata,
    pub first_type: DocumentType,
    pub second_type: DocumentType,
}

impl MergeResponse {
    pub fn new(
        document: MergedDocument,
        report: MergeReport,
        metadata: SbomMetadata,
        first_type: DocumentType,
        second_type: DocumentType,
    ) -> Self {
        Self {
            document,
            report,
            metadata,
            first_type,
            second_type,
        }
    }

    /// Process exit code of this merge: whether differences were found
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from_differences(self.report.has_differences())
    }
}
