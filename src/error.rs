//! Error types for the signature scanner.
//!
//! The analysis engine itself never fails: anything that goes wrong inside a
//! signature window degrades to default fields. Errors surface only at the
//! sampling I/O boundary and when serializing reports.

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while sampling or reporting on a PDF.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Decoding failure inside a signature window
    #[error("Decode error at window byte {offset}: {reason}")]
    Decode {
        /// Byte offset inside the window where decoding failed
        offset: usize,
        /// Reason for the failure
        reason: String,
    },

    /// Sampling policy whose head and tail overlap in the file being sampled
    #[error("Invalid sample request: {0}")]
    InvalidSample(String),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
