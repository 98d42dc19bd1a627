use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::{InputType, OutputFormat, SbomType};

/// Merge two SBOMs into a single document
#[derive(Parser, Debug)]
#[command(name = "sbom-merge")]
#[command(version)]
#[command(
    about = "Merge two SPDX or CycloneDX SBOMs into a single document",
    long_about = "Merge two SPDX or CycloneDX SBOMs into a single document.\n\n\
        Values from FILE1 win attribute conflicts unless they are NOASSERTION.\n\
        Exit status: 0 when both inputs carry the same information, 1 when\n\
        differences were found, 2 for invalid arguments, 3 for invalid inputs."
)]
pub struct Args {
    /// First SBOM
    #[arg(value_name = "FILE1")]
    pub file1: PathBuf,

    /// Second SBOM
    #[arg(value_name = "FILE2")]
    pub file2: PathBuf,

    /// Input SBOM type: auto, spdx or cyclonedx [default: auto]
    #[arg(long = "sbom", value_name = "TYPE")]
    pub input_type: Option<InputType>,

    /// Output format: tag, json or yaml [default: tag]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Output SBOM type: spdx or cyclonedx (cyclonedx is always json) [default: spdx]
    #[arg(long = "sbom-type", value_name = "TYPE")]
    pub sbom_type: Option<SbomType>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long = "output-file", value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Path to config file (defaults to ./sbom-merge.config.yml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
