/// Formatter adapters for different SBOM output formats
mod cyclonedx_formatter;
mod spdx_document;
mod spdx_formatter;
mod spdx_tag_value_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
pub use spdx_formatter::{SpdxJsonFormatter, SpdxYamlFormatter};
pub use spdx_tag_value_formatter::SpdxTagValueFormatter;
