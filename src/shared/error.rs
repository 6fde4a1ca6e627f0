use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between content that
/// needs attention and failures of the tool itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every content item was approved
    Success = 0,
    /// At least one content item is restricted, unreviewed or unresolved
    ReviewRequired = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
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
            ExitCode::ReviewRequired => write!(f, "Review Required (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license checking.
///
/// `MalformedDocument` is the one error a [`ContentRecord`] raises itself;
/// absent optional fields never become errors.
///
/// [`ContentRecord`]: crate::license_review::domain::ContentRecord
#[derive(Debug, Error)]
pub enum LicenseCheckError {
    #[error("Invalid content id: {id}\nReason: {reason}\n\n💡 Hint: Use ClearlyDefined coordinates (type/provider/namespace/name/revision) or Maven coordinates (group:artifact:version)")]
    InvalidContentId { id: String, reason: String },

    #[error("Malformed ClearlyDefined document for {identifier}: required field '{field}' {details}")]
    MalformedDocument {
        identifier: String,
        field: String,
        details: String,
    },

    #[error("Input file not found: {path}\n\n💡 Hint: Pass a file with one content id per line, or '-' to read from stdin")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("ClearlyDefined request failed: {details}\n\n💡 Hint: Please check your internet connection or the configured service URL")]
    ServiceError { details: String },

    /// Validation error for configuration and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}
