//! Configuration file support for sbom-merge.
//!
//! Provides YAML-based configuration through `sbom-merge.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::{InputType, OutputFormat, SbomType};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-merge.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub input_type: Option<String>,
    pub format: Option<String>,
    pub sbom_type: Option<String>,
    pub output_file: Option<PathBuf>,
    pub debug: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref value) = config.input_type {
        if let Err(e) = InputType::from_str(value) {
            bail!("Invalid config: input_type: {}", e);
        }
    }
    if let Some(ref value) = config.format {
        if let Err(e) = OutputFormat::from_str(value) {
            bail!("Invalid config: format: {}", e);
        }
    }
    if let Some(ref value) = config.sbom_type {
        if let Err(e) = SbomType::from_str(value) {
            bail!("Invalid config: sbom_type: {}", e);
        }
    }
    if let Some(ref path) = config.output_file {
        if path.as_os_str().is_empty() {
            bail!(
                "Invalid config: output_file must not be empty.\n\n\
                 💡 Hint: Remove the field to write the merged SBOM to stdout."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
