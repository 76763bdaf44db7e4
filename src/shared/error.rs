use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Analysis completed and the result was written
    Success = 0,
    /// Invalid command-line arguments
    InvalidArguments = 1,
    /// The descriptor or the dependency resolution failed
    AnalysisError = 2,
    /// Configuration or output I/O failed
    IoError = 3,
    /// Anything that is not one of the expected failures above
    UnexpectedError = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (1)"),
            ExitCode::AnalysisError => write!(f, "Analysis Error (2)"),
            ExitCode::IoError => write!(f, "IO Error (3)"),
            ExitCode::UnexpectedError => write!(f, "Unexpected Error (4)"),
        }
    }
}

/// User-facing failure category of an [`AnalyzerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing project, missing or malformed pom.xml, missing coordinates
    Descriptor,
    /// The dependency resolver could not collect or resolve a dependency
    Resolution,
    /// Configuration loading or output writing failed
    Io,
}

impl ErrorCategory {
    pub fn exit_code(self) -> ExitCode {
        match self {
            ErrorCategory::Descriptor | ErrorCategory::Resolution => ExitCode::AnalysisError,
            ErrorCategory::Io => ExitCode::IoError,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Descriptor => "Maven project validation failed",
            ErrorCategory::Resolution => "Dependency resolution failed",
            ErrorCategory::Io => "IO error",
        }
    }
}

/// Application-specific errors for dependency analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a Maven project directory with -d/--directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("pom.xml not found: {path}\n\n💡 Hint: {suggestion}")]
    DescriptorNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read pom.xml: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the pom.xml file is readable and well-formed XML")]
    DescriptorReadError { path: PathBuf, details: String },

    #[error("Invalid pom.xml: {path}\nReason: {reason}\n\n💡 Hint: Declare the coordinate directly or through a <parent> element")]
    DescriptorValidationError { path: PathBuf, reason: String },

    #[error("Failed to resolve dependencies of {coordinate}\nDetails: {details}\n\n💡 Hint: Please verify that the dependencies are declared with versions and present in the local repository")]
    ResolutionError { coordinate: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the output location")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl AnalyzerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyzerError::InvalidProjectPath { .. }
            | AnalyzerError::DescriptorNotFound { .. }
            | AnalyzerError::DescriptorReadError { .. }
            | AnalyzerError::DescriptorValidationError { .. }
            | AnalyzerError::SecurityError { .. } => ErrorCategory::Descriptor,
            AnalyzerError::ResolutionError { .. } => ErrorCategory::Resolution,
            AnalyzerError::FileWriteError { .. } | AnalyzerError::ConfigError { .. } => {
                ErrorCategory::Io
            }
        }
    }
}
