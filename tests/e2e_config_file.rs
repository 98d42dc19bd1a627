/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write a config file at the specified path.
fn write_config(path: &std::path::Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_discovered_config_sets_format() {
    let dir = TempDir::new().unwrap();
    write_config(&dir.path().join("sbom-merge.config.yml"), "format: json\n");

    let output = cargo_bin_cmd!("sbom-merge")
        .current_dir(dir.path())
        .arg(fixture("file1.spdx.json"))
        .arg(fixture("file2.spdx.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["spdxVersion"], "SPDX-2.3");
}

#[test]
fn test_discovered_config_sets_output_file() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("sbom-merge.config.yml"),
        "sbom_type: cyclonedx\noutput_file: merged.cdx.json\n",
    );

    cargo_bin_cmd!("sbom-merge")
        .current_dir(dir.path())
        .arg(fixture("file1.spdx.json"))
        .arg(fixture("file2.spdx.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(dir.path().join("merged.cdx.json")).unwrap();
    assert!(content.contains("\"bomFormat\": \"CycloneDX\""));
}

#[test]
fn test_no_config_uses_defaults() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("sbom-merge")
        .current_dir(dir.path())
        .arg(fixture("file1.spdx.json"))
        .arg(fixture("file2.spdx.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("SPDXVersion:"));
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn test_cli_format_overrides_config() {
    let dir = TempDir::new().unwrap();
    write_config(&dir.path().join("sbom-merge.config.yml"), "format: json\n");

    cargo_bin_cmd!("sbom-merge")
        .current_dir(dir.path())
        .args(["--format", "tag"])
        .arg(fixture("file1.spdx.json"))
        .arg(fixture("file2.spdx.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("SPDXVersion:"));
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("custom.yml");
    write_config(&config_path, "format: yaml\n");

    cargo_bin_cmd!("sbom-merge")
        .arg("--config")
        .arg(&config_path)
        .arg(fixture("file1.spdx.json"))
        .arg(fixture("file2.spdx.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("spdxVersion: SPDX-2.3"));
}

#[test]
fn test_config_input_type_restricts_parsers() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("sbom-merge.config.yml"),
        "input_type: cyclonedx\n",
    );

    cargo_bin_cmd!("sbom-merge")
        .current_dir(dir.path())
        .arg(fixture("file1.spdx.json"))
        .arg(fixture("file2.spdx.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unsupported SBOM format"));
}

// ============================================================================
// Errors and warnings
// ============================================================================

#[test]
fn test_explicit_config_missing() {
    cargo_bin_cmd!("sbom-merge")
        .args(["--config", "/nonexistent/sbom-merge.config.yml"])
        .arg(fixture("file1.spdx.json"))
        .arg(fixture("file2.spdx.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_invalid_config_value() {
    let dir = TempDir::new().unwrap();
    write_config(&dir.path().join("sbom-merge.config.yml"), "format: xml\n");

    cargo_bin_cmd!("sbom-merge")
        .current_dir(dir.path())
        .arg(fixture("file1.spdx.json"))
        .arg(fixture("file2.spdx.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid config: format"));
}

#[test]
fn test_unknown_config_field_warns() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir.path().join("sbom-merge.config.yml"),
        "format: tag\ncolour: always\n",
    );

    cargo_bin_cmd!("sbom-merge")
        .current_dir(dir.path())
        .arg(fixture("file1.spdx.json"))
        .arg(fixture("file2.spdx.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config field 'colour'"));
}
