/// Parser adapters for the supported input dialects
mod cyclonedx_parser;
mod detecting_parser;
mod spdx_model;
mod spdx_parser;

pub use cyclonedx_parser::CycloneDxParser;
pub use detecting_parser::DetectingParser;
pub use spdx_parser::SpdxParser;
