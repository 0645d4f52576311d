//! Error types for spline-io.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for spline-io operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while exporting or importing splines.
#[derive(Debug, Error)]
pub enum Error {
    /// Export was invoked with no active curve object.
    #[error("no active curve object to export")]
    NoActiveCurve,

    /// The document does not match the spline schema.
    #[error("schema error at {path}: {reason}")]
    Schema {
        /// JSON path of the offending value.
        path: String,
        /// What was expected.
        reason: String,
    },

    /// A vector object is missing a component or has a non-numeric one.
    #[error("malformed vector at {path}: component '{component}' missing or not a number")]
    MalformedVector {
        /// JSON path of the vector object.
        path: String,
        /// The missing component (`x`, `y` or `z`).
        component: char,
    },

    /// A number cannot be represented in JSON (NaN or infinite).
    #[error("non-finite number at {path}")]
    NonFinite {
        /// JSON path of the offending number.
        path: String,
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON syntax or serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown or unsupported file format.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// No reader available for the given format.
    #[error("no reader for format: {0}")]
    NoReader(String),

    /// No writer available for the given format.
    #[error("no writer for format: {0}")]
    NoWriter(String),

    /// An option value is out of range.
    #[error("invalid option {name}: {reason}")]
    InvalidOption {
        /// Option name.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl Error {
    /// Create a schema error.
    pub fn schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an I/O error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by document content rather than the environment.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Self::Schema { .. }
                | Self::MalformedVector { .. }
                | Self::NonFinite { .. }
                | Self::Json(_)
        )
    }
}
