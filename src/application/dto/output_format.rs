/// Serialisation format of the generated SBOM
///
/// It belongs in the application layer as both the CLI (inbound adapter)
/// and the formatters (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// SPDX tag-value (default)
    #[default]
    Tag,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tag" => Ok(OutputFormat::Tag),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'tag', 'json' or 'yaml'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Tag => write!(f, "tag"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// SBOM dialect of the generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SbomType {
    #[default]
    Spdx,
    CycloneDx,
}

impl SbomType {
    /// CycloneDX output is always JSON; SPDX honours the requested format
    pub fn effective_format(&self, requested: OutputFormat) -> OutputFormat {
        match self {
            SbomType::Spdx => requested,
            SbomType::CycloneDx => OutputFormat::Json,
        }
    }
}

impl std::str::FromStr for SbomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spdx" => Ok(SbomType::Spdx),
            "cyclonedx" | "cdx" => Ok(SbomType::CycloneDx),
            _ => Err(format!(
                "Invalid SBOM type: {}. Please specify 'spdx' or 'cyclonedx'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SbomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SbomType::Spdx => write!(f, "spdx"),
            SbomType::CycloneDx => write!(f, "cyclonedx"),
        }
    }
}

/// Which input dialects the parser may detect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Auto,
    Spdx,
    CycloneDx,
}

impl std::str::FromStr for InputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(InputType::Auto),
            "spdx" => Ok(InputType::Spdx),
            "cyclonedx" | "cdx" => Ok(InputType::CycloneDx),
            _ => Err(format!(
                "Invalid SBOM input type: {}. Please specify 'auto', 'spdx' or 'cyclonedx'",
                s
            )),
        }
    }
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputType::Auto => write!(f, "auto"),
            InputType::Spdx => write!(f, "spdx"),
            InputType::CycloneDx => write!(f, "cyclonedx"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("tag").unwrap(), OutputFormat::Tag);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("yaml").unwrap(), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_str("yml").unwrap(), OutputFormat::Yaml);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("xml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("xml"));
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_default_and_display() {
        assert_eq!(OutputFormat::default(), OutputFormat::Tag);
        assert_eq!(OutputFormat::Tag.to_string(), "tag");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_sbom_type_from_str() {
        assert_eq!(SbomType::from_str("spdx").unwrap(), SbomType::Spdx);
        assert_eq!(SbomType::from_str("CycloneDX").unwrap(), SbomType::CycloneDx);
        assert!(SbomType::from_str("swid").is_err());
    }

    #[test]
    fn test_cyclonedx_forces_json() {
        assert_eq!(
            SbomType::CycloneDx.effective_format(OutputFormat::Tag),
            OutputFormat::Json
        );
        assert_eq!(
            SbomType::Spdx.effective_format(OutputFormat::Yaml),
            OutputFormat::Yaml
        );
    }

    #[test]
    fn test_input_type_from_str() {
        assert_eq!(InputType::from_str("auto").unwrap(), InputType::Auto);
        assert_eq!(InputType::from_str("SPDX").unwrap(), InputType::Spdx);
        assert_eq!(InputType::from_str("cyclonedx").unwrap(), InputType::CycloneDx);
        let error = InputType::from_str("rdf").unwrap_err();
        assert!(error.contains("auto"));
    }
}
