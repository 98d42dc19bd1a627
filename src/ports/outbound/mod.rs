/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, parsers, generators, console).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_parser;
pub mod sbom_reader;

pub use formatter::SbomFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_parser::{ParsedSbom, SbomParser};
pub use sbom_reader::SbomReader;
