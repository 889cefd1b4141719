//! Transcript error types.

use thiserror::Error;

/// Errors that can occur while reading input or writing a transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// Reading or writing the underlying stream failed
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input ended before a disk count was read
    #[error("No disk count given: input ended")]
    MissingInput,

    /// Input line was not an integer
    #[error("Invalid disk count '{input}': expected an integer")]
    InvalidInput { input: String },
}
