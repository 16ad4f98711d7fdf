use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow calling scripts to tell a broken composition apart
/// from a broken invocation or environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested composition was resolved
    Success = 0,
    /// A composition could not be resolved (unknown barcode, too deep, cycle, timeout)
    ResolutionFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (catalog I/O, network error, bad config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an application error onto the exit code it should produce.
    pub fn for_error(error: &anyhow::Error) -> Self {
        if error.downcast_ref::<ResolveError>().is_some() {
            ExitCode::ResolutionFailed
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ResolutionFailed => write!(f, "Resolution Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Terminal failures of a composition resolution.
///
/// Every variant aborts the whole resolution; no partial tree is ever
/// returned alongside one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Root barcode not found: {barcode} (tenant: {tenant})\n\n💡 Hint: Check the barcode and that the product belongs to this tenant")]
    RootNotFound { tenant: String, barcode: String },

    #[error("Failed to look up root barcode: {barcode}\nReason: {reason}")]
    RootLookupFailed { barcode: String, reason: String },

    #[error("Component could not be resolved: {barcode}\nReason: {reason}")]
    ComponentUnresolved { barcode: String, reason: String },

    #[error("Composition nests deeper than {max_depth} levels at barcode: {barcode}\n\n💡 Hint: The composition graph may be cyclic")]
    TooDeep { barcode: String, max_depth: usize },

    #[error("Cyclic composition detected: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    #[error("Lookup deadline exceeded while resolving barcode: {barcode}")]
    DeadlineExceeded { barcode: String },
}

impl ResolveError {
    /// The barcode the resolution stopped at.
    pub fn barcode(&self) -> &str {
        match self {
            ResolveError::RootNotFound { barcode, .. }
            | ResolveError::RootLookupFailed { barcode, .. }
            | ResolveError::ComponentUnresolved { barcode, .. }
            | ResolveError::TooDeep { barcode, .. }
            | ResolveError::DeadlineExceeded { barcode } => barcode,
            ResolveError::CycleDetected { path } => {
                path.last().map(String::as_str).unwrap_or_default()
            }
        }
    }
}

/// Application-specific errors for catalog loading and output.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("Catalog file not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the catalog is valid JSON, YAML or TOML with a top-level 'tenants' table")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid catalog path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a readable catalog file")]
    InvalidCatalogPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
