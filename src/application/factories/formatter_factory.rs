use crate::adapters::outbound::formatters::{
    CycloneDxFormatter, SpdxJsonFormatter, SpdxTagValueFormatter, SpdxYamlFormatter,
};
use crate::application::dto::{OutputFormat, SbomType};
use crate::ports::outbound::SbomFormatter;

/// Concrete output a formatter produces: dialect plus encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    SpdxTagValue,
    SpdxJson,
    SpdxYaml,
    CycloneDxJson,
}

impl FormatterType {
    /// Resolves the requested dialect and encoding
    ///
    /// CycloneDX output is always JSON, whatever format was requested.
    pub fn resolve(sbom_type: SbomType, format: OutputFormat) -> Self {
        match (sbom_type, sbom_type.effective_format(format)) {
            (SbomType::CycloneDx, _) => FormatterType::CycloneDxJson,
            (SbomType::Spdx, OutputFormat::Tag) => FormatterType::SpdxTagValue,
            (SbomType::Spdx, OutputFormat::Json) => FormatterType::SpdxJson,
            (SbomType::Spdx, OutputFormat::Yaml) => FormatterType::SpdxYaml,
        }
    }
}

/// Factory for creating SBOM formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output
    ///
    /// # Arguments
    /// * `formatter_type` - The dialect and encoding to create a formatter for
    ///
    /// # Returns
    /// A boxed SbomFormatter trait object appropriate for the specified output
    ///
    /// # Examples
    /// ```
    /// use sbom_merge::application::dto::{OutputFormat, SbomType};
    /// use sbom_merge::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let formatter_type = FormatterType::resolve(SbomType::Spdx, OutputFormat::Json);
    /// let formatter = FormatterFactory::create(formatter_type);
    /// ```
    pub fn create(formatter_type: FormatterType) -> Box<dyn SbomFormatter> {
        match formatter_type {
            FormatterType::SpdxTagValue => Box::new(SpdxTagValueFormatter::new()),
            FormatterType::SpdxJson => Box::new(SpdxJsonFormatter::new()),
            FormatterType::SpdxYaml => Box::new(SpdxYamlFormatter::new()),
            FormatterType::CycloneDxJson => Box::new(CycloneDxFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output
    ///
    /// # Examples
    /// ```
    /// use sbom_merge::application::factories::{FormatterFactory, FormatterType};
    ///
    /// let message = FormatterFactory::progress_message(FormatterType::CycloneDxJson);
    /// assert_eq!(message, "📝 Generating CycloneDX JSON format output...");
    /// ```
    pub fn progress_message(formatter_type: FormatterType) -> &'static str {
        match formatter_type {
            FormatterType::SpdxTagValue => "📝 Generating SPDX tag-value format output...",
            FormatterType::SpdxJson => "📝 Generating SPDX JSON format output...",
            FormatterType::SpdxYaml => "📝 Generating SPDX YAML format output...",
            FormatterType::CycloneDxJson => "📝 Generating CycloneDX JSON format output...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_merge::domain::{MergedDocument, SbomMetadata};

    fn metadata() -> SbomMetadata {
        SbomMetadata::new(
            "SBOM-test".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
            "sbom-merge".to_string(),
            "0.3.0".to_string(),
            "urn:uuid:00000000-0000-4000-8000-000000000000".to_string(),
        )
    }

    #[test]
    fn test_resolve_formatter_type() {
        assert_eq!(
            FormatterType::resolve(SbomType::Spdx, OutputFormat::Tag),
            FormatterType::SpdxTagValue
        );
        assert_eq!(
            FormatterType::resolve(SbomType::Spdx, OutputFormat::Yaml),
            FormatterType::SpdxYaml
        );
        assert_eq!(
            FormatterType::resolve(SbomType::CycloneDx, OutputFormat::Tag),
            FormatterType::CycloneDxJson
        );
        assert_eq!(
            FormatterType::resolve(SbomType::CycloneDx, OutputFormat::Yaml),
            FormatterType::CycloneDxJson
        );
    }

    #[test]
    fn test_create_formats_each_dialect() {
        let document = MergedDocument::default();

        let tag = FormatterFactory::create(FormatterType::SpdxTagValue)
            .format(&document, &metadata())
            .unwrap();
        assert!(tag.starts_with("SPDXVersion: SPDX-2.3"));

        let json = FormatterFactory::create(FormatterType::SpdxJson)
            .format(&document, &metadata())
            .unwrap();
        assert!(json.contains("\"spdxVersion\": \"SPDX-2.3\""));

        let cdx = FormatterFactory::create(FormatterType::CycloneDxJson)
            .format(&document, &metadata())
            .unwrap();
        assert!(cdx.contains("\"bomFormat\": \"CycloneDX\""));
    }

    #[test]
    fn test_progress_message_spdx() {
        let message = FormatterFactory::progress_message(FormatterType::SpdxTagValue);
        assert_eq!(message, "📝 Generating SPDX tag-value format output...");
    }

    #[test]
    fn test_progress_message_cyclonedx() {
        let message = FormatterFactory::progress_message(FormatterType::CycloneDxJson);
        assert_eq!(message, "📝 Generating CycloneDX JSON format output...");
    }
}
