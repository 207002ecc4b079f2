//! Error types for the vitae library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vitae operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a record or generating outputs.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The résumé document is not valid JSON or does not fit the record shape.
    #[error("Invalid resume document: {0}")]
    Json(#[from] serde_json::Error),

    /// The résumé document could not be read from disk.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An output file could not be written.
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A required template or asset file is missing.
    #[error("Missing template file: {}", .0.display())]
    MissingTemplate(PathBuf),

    /// A date could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The channel name does not match any generator.
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    /// Error during rendering (LaTeX, HTML, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
