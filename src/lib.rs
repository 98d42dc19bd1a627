//! sbom-merge - merge two SBOMs into one
//!
//! This library reconciles two Software Bills of Materials (SPDX tag-value,
//! JSON or YAML, and CycloneDX JSON) into a single document, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_merge`): The reconciliation engine and its data model
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_merge::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let sbom_reader = FileSystemReader::new();
//! let sbom_parser = DetectingParser::default();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = MergeSbomUseCase::new(sbom_reader, sbom_parser, progress_reporter);
//!
//! // Execute
//! let request = MergeRequest::new(
//!     PathBuf::from("sbom1.spdx.json"),
//!     PathBuf::from("sbom2.spdx.json"),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = SpdxTagValueFormatter::new();
//! let output = formatter.format(&response.document, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_merge;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CycloneDxFormatter, SpdxJsonFormatter, SpdxTagValueFormatter, SpdxYamlFormatter,
    };
    pub use crate::adapters::outbound::parsers::{CycloneDxParser, DetectingParser, SpdxParser};
    pub use crate::application::dto::{
        InputType, MergeRequest, MergeResponse, OutputFormat, SbomType,
    };
    pub use crate::application::use_cases::MergeSbomUseCase;
    pub use crate::ports::inbound::SbomMergePort;
    pub use crate::ports::outbound::{
        OutputPresenter, ParsedSbom, ProgressReporter, SbomFormatter, SbomParser, SbomReader,
    };
    pub use crate::sbom_merge::domain::{
        DocumentType, MergeReport, MergedDocument, Record, Relationship, SbomDocument,
        SbomMetadata, NOASSERTION,
    };
    pub use crate::sbom_merge::policies::ConflictResolution;
    pub use crate::sbom_merge::services::{RootSynthesizer, SbomMerger};
    pub use crate::shared::error::{ExitCode, SbomError};
    pub use crate::shared::Result;
}
