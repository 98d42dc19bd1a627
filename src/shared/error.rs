use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// The first two codes are both successful runs: they tell CI whether the
/// two inputs differed. The remaining codes mean the merge did not happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Merge performed, both inputs carried the same information
    NoDifferences = 0,
    /// Merge performed, differences between the inputs were found
    DifferencesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Invalid inputs or application error (missing file, parse error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Exit code of a completed merge
    pub fn from_differences(has_differences: bool) -> Self {
        if has_differences {
            ExitCode::DifferencesFound
        } else {
            ExitCode::NoDifferences
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::NoDifferences => write!(f, "No Differences (0)"),
            ExitCode::DifferencesFound => write!(f, "Differences Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM merging.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Input SBOM not found: {path}\n\n💡 Hint: Please verify the file path")]
    InputNotFound { path: PathBuf },

    #[error("Both inputs refer to the same SBOM: {path}\n\n💡 Hint: Must specify different filenames")]
    IdenticalInputs { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse SBOM: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid SPDX or CycloneDX document")]
    ParseError { path: PathBuf, details: String },

    #[error("Unsupported SBOM format: {path}\nDetails: {details}\n\n💡 Hint: Supported inputs are SPDX (tag-value, JSON, YAML) and CycloneDX JSON")]
    UnsupportedFormat { path: PathBuf, details: String },

    #[error("Failed to generate {format} output\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ExitCode tests
    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::NoDifferences.as_i32(), 0);
        assert_eq!(ExitCode::DifferencesFound.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::NoDifferences), "No Differences (0)");
        assert_eq!(
            format!("{}", ExitCode::DifferencesFound),
            "Differences Found (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_from_differences() {
        assert_eq!(ExitCode::from_differences(true), ExitCode::DifferencesFound);
        assert_eq!(ExitCode::from_differences(false), ExitCode::NoDifferences);
    }

    // SbomError tests
    #[test]
    fn test_input_not_found_display() {
        let error = SbomError::InputNotFound {
            path: PathBuf::from("/test/missing.spdx"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Input SBOM not found"));
        assert!(display.contains("/test/missing.spdx"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_identical_inputs_display() {
        let error = SbomError::IdenticalInputs {
            path: PathBuf::from("same.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("same SBOM"));
        assert!(display.contains("Must specify different filenames"));
    }

    #[test]
    fn test_parse_error_display() {
        let error = SbomError::ParseError {
            path: PathBuf::from("/test/bad.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse SBOM"));
        assert!(display.contains("/test/bad.json"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let error = SbomError::UnsupportedFormat {
            path: PathBuf::from("notes.txt"),
            details: "no SBOM markers found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unsupported SBOM format"));
        assert!(display.contains("CycloneDX JSON"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = SbomError::FileWriteError {
            path: PathBuf::from("/test/output.spdx"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/output.spdx"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_read_error_display() {
        let error = SbomError::FileReadError {
            path: PathBuf::from("/test/file.json"),
            details: "File not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/file.json"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_output_generation_error_display() {
        let error = SbomError::OutputGenerationError {
            format: "SPDX JSON".to_string(),
            details: "serialization failed".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to generate SPDX JSON output"));
    }
}
