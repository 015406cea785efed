//! Error types for the segmented control engine.

use thiserror::Error;

/// Segmented control errors.
#[derive(Debug, Error, PartialEq)]
pub enum SegmentError {
    #[error("Segment index {index} out of range (control has {len} segments)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid style: {0}")]
    InvalidStyle(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for SegmentError {
    fn from(err: serde_json::Error) -> Self {
        SegmentError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SegmentError {
    fn from(err: std::io::Error) -> Self {
        SegmentError::Io(err.to_string())
    }
}

/// Result type for segmented control operations.
pub type SegmentResult<T> = Result<T, SegmentError>;
