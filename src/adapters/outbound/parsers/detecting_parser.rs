use super::{CycloneDxParser, SpdxParser};
use crate::application::dto::InputType;
use crate::ports::outbound::{ParsedSbom, SbomParser};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// DetectingParser adapter that dispatches to the parser recognising the content
///
/// `InputType::Auto` tries every dialect; an explicit input type restricts
/// detection to that dialect alone.
pub struct DetectingParser {
    input_type: InputType,
    parsers: Vec<Box<dyn SbomParser>>,
}

impl DetectingParser {
    pub fn new(input_type: InputType) -> Self {
        let parsers: Vec<Box<dyn SbomParser>> = match input_type {
            InputType::Auto => vec![Box::new(SpdxParser::new()), Box::new(CycloneDxParser::new())],
            InputType::Spdx => vec![Box::new(SpdxParser::new())],
            InputType::CycloneDx => vec![Box::new(CycloneDxParser::new())],
        };
        Self {
            input_type,
            parsers,
        }
    }

    fn select(&self, content: &str) -> Option<&dyn SbomParser> {
        self.parsers
            .iter()
            .find(|parser| parser.detect(content))
            .map(|parser| parser.as_ref())
    }
}

impl Default for DetectingParser {
    fn default() -> Self {
        Self::new(InputType::Auto)
    }
}

impl SbomParser for DetectingParser {
    fn detect(&self, content: &str) -> bool {
        self.select(content).is_some()
    }

    fn parse(&self, content: &str) -> Result<ParsedSbom> {
        let parser = self.select(content).ok_or_else(|| SbomError::Validation {
            message: format!("no {} parser recognises this document", self.input_type),
        })?;
        tracing::debug!(dialect = parser.format_name(), "input dialect detected");
        parser.parse(content)
    }

    fn format_name(&self) -> &'static str {
        match self.input_type {
            InputType::Auto => "auto",
            InputType::Spdx => "SPDX",
            InputType::CycloneDx => "CycloneDX",
        }
    }
}
