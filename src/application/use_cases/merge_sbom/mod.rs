use crate::application::dto::{MergeRequest, MergeResponse};
use crate::ports::inbound::SbomMergePort;
use crate::ports::outbound::{ParsedSbom, ProgressReporter, SbomParser, SbomReader};
use crate::sbom_merge::services::{MetadataGenerator, RootSynthesizer, SbomMerger};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;

/// MergeSbomUseCase - Core use case for merging two SBOMs
///
/// This use case orchestrates the merge workflow using generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `R` - SbomReader implementation
/// * `P` - SbomParser implementation
/// * `PR` - ProgressReporter implementation
pub struct MergeSbomUseCase<R, P, PR> {
    sbom_reader: R,
    sbom_parser: P,
    progress_reporter: PR,
}

impl<R, P, PR> MergeSbomUseCase<R, P, PR>
where
    R: SbomReader,
    P: SbomParser,
    PR: ProgressReporter,
{
    /// Creates a new MergeSbomUseCase with injected dependencies
    pub fn new(sbom_reader: R, sbom_parser: P, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            sbom_parser,
            progress_reporter,
        }
    }

    /// Executes the merge use case
    ///
    /// # Arguments
    /// * `request` - Paths of the two input documents
    ///
    /// # Returns
    /// MergeResponse containing the merged document, the merge report and
    /// the metadata for the output document
    pub fn execute(&self, request: MergeRequest) -> Result<MergeResponse> {
        // Step 1: Reject identical or missing inputs
        request.validate(|path| {
            self.progress_reporter
                .report_error(&format!("❌ File not found: {}", path.display()))
        })?;

        // Step 2: Read and parse both inputs
        let first = self.load_document(&request.first)?;
        let second = self.load_document(&request.second)?;

        // Step 3: Reconcile
        let root = RootSynthesizer::synthesize(&request.first, &request.second);
        let document_root = root.document_root.clone();
        self.progress_reporter
            .report(&format!("🔀 Merging into {}...", root.name()));
        let (document, report) = SbomMerger::merge(&first.document, &second.document, root);

        if !report.version_conflicts.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} package(s) had conflicting versions; the version from {} was kept.",
                report.version_conflicts.len(),
                request.second.display()
            ));
        }
        self.progress_reporter.report(&format!(
            "🔗 Matched by name: {} file(s), {} package(s)",
            report.reconciled_files, report.reconciled_packages
        ));
        self.progress_reporter.report_completion(&format!(
            "✅ Merged {} file(s), {} package(s), {} relationship(s)",
            document.files.len(),
            document.packages.len(),
            document.relationships.len()
        ));
        self.progress_reporter.report_summary(&report.counter);

        // Step 4: Build response
        let metadata = MetadataGenerator::generate_default_metadata(&document_root);
        Ok(MergeResponse::new(
            document,
            report,
            metadata,
            first.document_type,
            second.document_type,
        ))
    }

    /// Reads and parses one input, reporting progress
    fn load_document(&self, path: &Path) -> Result<ParsedSbom> {
        self.progress_reporter
            .report(&format!("📖 Loading SBOM from: {}", path.display()));

        let content = self.sbom_reader.read_sbom(path)?;

        if !self.sbom_parser.detect(&content) {
            return Err(SbomError::UnsupportedFormat {
                path: path.to_path_buf(),
                details: format!(
                    "content is not a recognised {} document",
                    self.sbom_parser.format_name()
                ),
            }
            .into());
        }

        let parsed = self
            .sbom_parser
            .parse(&content)
            .map_err(|e| SbomError::ParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            document_type = %parsed.document_type,
            files = parsed.document.files.len(),
            packages = parsed.document.packages.len(),
            relationships = parsed.document.relationships.len(),
            "input document loaded"
        );
        self.progress_reporter.report(&format!(
            "✅ Detected {}: {} file(s), {} package(s), {} relationship(s)",
            parsed.document_type,
            parsed.document.files.len(),
            parsed.document.packages.len(),
            parsed.document.relationships.len()
        ));

        Ok(parsed)
    }
}

impl<R, P, PR> SbomMergePort for MergeSbomUseCase<R, P, PR>
where
    R: SbomReader,
    P: SbomParser,
    PR: ProgressReporter,
{
    fn merge_sboms(&self, request: MergeRequest) -> Result<MergeResponse> {
        self.execute(request)
    }
}
