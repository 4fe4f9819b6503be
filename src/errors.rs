/*!
 * Error types for the lineconv application.
 *
 * This module contains custom error types for the conversion pipeline,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Domain error raised by the line dispatcher.
///
/// Kept separate from [`AppError`] so callers can tell "the file content is
/// not convertible" apart from I/O failures.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A prepared line matched none of the three recognizers
    #[error("line is not a date/time, a number, or a char-index instruction: {0:?}")]
    UnrecognizedLine(String),
}

/// Main application error type for per-file pipeline failures
#[derive(Error, Debug)]
pub enum AppError {
    /// Input file missing or unreadable
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path of the input file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path of the output file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A line failed conversion, aborting the whole file
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The configured source culture is not in the registry
    #[error("unknown source culture: {0:?}")]
    UnknownCulture(String),
}

impl AppError {
    /// True when the error is the domain-level "no recognizer matched" case
    pub fn is_format_error(&self) -> bool {
        matches!(self, AppError::Convert(ConvertError::UnrecognizedLine(_)))
    }
}
