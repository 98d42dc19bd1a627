use crate::sbom_merge::domain::{DocumentType, SbomDocument};
use crate::shared::Result;

/// Result of parsing one input document
#[derive(Debug, Clone)]
pub struct ParsedSbom {
    pub document: SbomDocument,
    /// Detected dialect; informational only
    pub document_type: DocumentType,
}

impl ParsedSbom {
    pub fn new(document: SbomDocument, document_type: DocumentType) -> Self {
        Self {
            document,
            document_type,
        }
    }
}

/// SbomParser port for turning interchange documents into records
///
/// Parsers produce files, packages and relationships in document order and
/// do not validate the schema beyond what they need to extract them.
pub trait SbomParser {
    /// Returns true if this parser recognises `content`
    fn detect(&self, content: &str) -> bool;

    /// Parses `content` into an `SbomDocument`
    ///
    /// # Errors
    /// Returns an error if the content is not well-formed for this dialect
    fn parse(&self, content: &str) -> Result<ParsedSbom>;

    /// Human-readable dialect name, used in messages
    fn format_name(&self) -> &'static str;
}

impl<T: SbomParser + ?Sized> SbomParser for Box<T> {
    fn detect(&self, content: &str) -> bool {
        (**self).detect(content)
    }

    fn parse(&self, content: &str) -> Result<ParsedSbom> {
        (**self).parse(content)
    }

    fn format_name(&self) -> &'static str {
        (**self).format_name()
    }
}
