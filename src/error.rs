//! Unified error types for cdx-bom.
//!
//! All model errors are synchronous and propagate straight to the caller;
//! the model never retries, logs, or swallows an error internally.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cdx-bom operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BomError {
    /// A file-based component factory was pointed at a path that does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structural consistency violations reported by `Bom::validate`
    #[error("validation failed: {}", violations.join("; "))]
    Validation { violations: Vec<String> },

    /// Component fields that cannot be rendered as a typed package URL
    #[error("malformed package URL: {purl} - {reason}")]
    InvalidPurl { purl: String, reason: String },

    /// A string that is not a recognized SPDX license id
    #[error("unknown SPDX license id: {0}")]
    InvalidSpdxId(String),

    /// A string that is not a valid compound SPDX license expression
    #[error("invalid SPDX license expression: {0}")]
    InvalidLicenseExpression(String),
}

/// Convenient Result type for cdx-bom operations
pub type Result<T> = std::result::Result<T, BomError>;

impl BomError {
    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error from a set of violation descriptions
    pub fn validation(violations: Vec<String>) -> Self {
        Self::Validation { violations }
    }

    /// Create an invalid-purl error
    pub fn invalid_purl(purl: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPurl {
            purl: purl.into(),
            reason: reason.into(),
        }
    }

    /// The violation descriptions carried by a `Validation` error, if any
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Validation { violations } => violations,
            _ => &[],
        }
    }
}

impl From<std::io::Error> for BomError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}
