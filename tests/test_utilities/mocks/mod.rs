/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_sbom_parser;
mod mock_sbom_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sbom_parser::MockSbomParser;
pub use mock_sbom_reader::MockSbomReader;
