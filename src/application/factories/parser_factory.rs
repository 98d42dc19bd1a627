use crate::adapters::outbound::parsers::DetectingParser;
use crate::application::dto::InputType;
use crate::ports::outbound::SbomParser;

/// Factory for creating the input parser
///
/// Every input goes through content detection; the input type only
/// narrows which dialects detection may pick.
pub struct ParserFactory;

impl ParserFactory {
    /// Creates a parser restricted to `input_type`
    ///
    /// # Examples
    /// ```
    /// use sbom_merge::application::dto::InputType;
    /// use sbom_merge::application::factories::ParserFactory;
    ///
    /// let parser = ParserFactory::create(InputType::Auto);
    /// assert!(parser.detect("SPDXVersion: SPDX-2.3"));
    /// ```
    pub fn create(input_type: InputType) -> Box<dyn SbomParser> {
        Box::new(DetectingParser::new(input_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cyclonedx_only() {
        let parser = ParserFactory::create(InputType::CycloneDx);
        assert!(parser.detect(r#"{"bomFormat": "CycloneDX"}"#));
        assert!(!parser.detect("SPDXVersion: SPDX-2.3"));
    }
}
