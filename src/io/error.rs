//! Error types for loading, analysis, and export operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Failed to read or parse the tabular input file
    TableLoad {
        /// Path to the input file
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Input table lacks a required coordinate column
    MissingColumn {
        /// Path to the input file
        path: PathBuf,
        /// Name of the missing column
        column: &'static str,
    },

    /// Point set too small for neighbour statistics or the Fry transform
    InsufficientPoints {
        /// Number of points actually loaded
        count: usize,
    },

    /// Pipeline parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a tabular report
    ReportExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Failed to render a figure
    Render {
        /// Path where rendering was attempted
        path: PathBuf,
        /// Description of the backend failure
        reason: String,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableLoad { path, source } => {
                write!(f, "Failed to load table '{}': {source}", path.display())
            }
            Self::MissingColumn { path, column } => {
                write!(
                    f,
                    "Input '{}' is missing required column '{column}'",
                    path.display()
                )
            }
            Self::InsufficientPoints { count } => {
                write!(
                    f,
                    "Need at least 2 points for neighbour statistics, got {count}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ReportExport { path, source } => {
                write!(
                    f,
                    "Failed to export report to '{}': {source}",
                    path.display()
                )
            }
            Self::Render { path, reason } => {
                write!(f, "Failed to render figure '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TableLoad { source, .. } | Self::ReportExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, AnalysisError>;

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error with path and operation context
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AnalysisError {
    AnalysisError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
