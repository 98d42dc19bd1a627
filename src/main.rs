mod adapters;
mod application;
mod cli;
mod config;
mod ports;
mod sbom_merge;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::FileSystemReader;
use application::dto::{InputType, MergeRequest, OutputFormat, SbomType};
use application::factories::{
    FormatterFactory, FormatterType, ParserFactory, PresenterFactory, PresenterType,
};
use application::use_cases::MergeSbomUseCase;
use cli::Args;
use config::ConfigFile;
use shared::error::ExitCode;
use shared::Result;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Options after applying CLI flags over config values over defaults
#[derive(Debug, PartialEq)]
struct MergeOptions {
    first: PathBuf,
    second: PathBuf,
    input_type: InputType,
    format: OutputFormat,
    sbom_type: SbomType,
    output_file: Option<PathBuf>,
    debug: bool,
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let options = resolve_options(args, config)?;

    init_tracing(options.debug);
    tracing::debug!(?options, "resolved options");

    // Create adapters (Dependency Injection)
    let sbom_reader = FileSystemReader::new();
    let sbom_parser = ParserFactory::create(options.input_type);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = MergeSbomUseCase::new(sbom_reader, sbom_parser, progress_reporter);

    // Execute use case
    let response = use_case.execute(MergeRequest::new(options.first, options.second))?;
    tracing::debug!(
        first = %response.first_type,
        second = %response.second_type,
        "input document types"
    );

    // Display progress message
    let formatter_type = FormatterType::resolve(options.sbom_type, options.format);
    eprintln!("{}", FormatterFactory::progress_message(formatter_type));

    // Create formatter using factory
    let formatter = FormatterFactory::create(formatter_type);
    let formatted_output = formatter.format(&response.document, &response.metadata)?;

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from_output(
        options.output_file.clone(),
    ));
    presenter.present(&formatted_output)?;

    if let Some(path) = options.output_file {
        eprintln!("✅ Output complete: {}", path.display());
    }

    Ok(response.exit_code())
}

/// Explicit `--config` path, or auto-discovery in the current directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

fn resolve_options(args: Args, config: Option<ConfigFile>) -> Result<MergeOptions> {
    let config = config.unwrap_or_default();

    let input_type = match (args.input_type, config.input_type.as_deref()) {
        (Some(value), _) => value,
        (None, Some(value)) => InputType::from_str(value).map_err(anyhow::Error::msg)?,
        (None, None) => InputType::default(),
    };
    let format = match (args.format, config.format.as_deref()) {
        (Some(value), _) => value,
        (None, Some(value)) => OutputFormat::from_str(value).map_err(anyhow::Error::msg)?,
        (None, None) => OutputFormat::default(),
    };
    let sbom_type = match (args.sbom_type, config.sbom_type.as_deref()) {
        (Some(value), _) => value,
        (None, Some(value)) => SbomType::from_str(value).map_err(anyhow::Error::msg)?,
        (None, None) => SbomType::default(),
    };

    Ok(MergeOptions {
        first: args.file1,
        second: args.file2,
        input_type,
        format,
        sbom_type,
        output_file: args.output_file.or(config.output_file),
        debug: args.debug || config.debug.unwrap_or(false),
    })
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level chosen here
fn init_tracing(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["sbom-merge"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["a.spdx", "b.spdx"]);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_resolve_defaults() {
        let options = resolve_options(args(&[]), None).unwrap();

        assert_eq!(options.input_type, InputType::Auto);
        assert_eq!(options.format, OutputFormat::Tag);
        assert_eq!(options.sbom_type, SbomType::Spdx);
        assert!(options.output_file.is_none());
        assert!(!options.debug);
        assert_eq!(options.first, PathBuf::from("a.spdx"));
    }

    #[test]
    fn test_resolve_config_over_defaults() {
        let config = ConfigFile {
            input_type: Some("cyclonedx".to_string()),
            format: Some("yaml".to_string()),
            output_file: Some(PathBuf::from("merged.yaml")),
            debug: Some(true),
            ..Default::default()
        };

        let options = resolve_options(args(&[]), Some(config)).unwrap();

        assert_eq!(options.input_type, InputType::CycloneDx);
        assert_eq!(options.format, OutputFormat::Yaml);
        assert_eq!(options.output_file, Some(PathBuf::from("merged.yaml")));
        assert!(options.debug);
    }

    #[test]
    fn test_resolve_cli_over_config() {
        let config = ConfigFile {
            format: Some("yaml".to_string()),
            sbom_type: Some("cyclonedx".to_string()),
            output_file: Some(PathBuf::from("from-config.json")),
            ..Default::default()
        };

        let options = resolve_options(
            args(&["--format", "json", "--sbom-type", "spdx", "-o", "cli.json"]),
            Some(config),
        )
        .unwrap();

        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.sbom_type, SbomType::Spdx);
        assert_eq!(options.output_file, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_resolve_invalid_config_value() {
        let config = ConfigFile {
            sbom_type: Some("swid".to_string()),
            ..Default::default()
        };

        let err = resolve_options(args(&[]), Some(config)).unwrap_err();
        assert!(err.to_string().contains("Invalid SBOM type"));
    }
}
