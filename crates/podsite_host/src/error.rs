//! Host error types

use thiserror::Error;

/// Host-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HostError {
    /// Attribute name cannot appear on an element
    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    /// The document rejected the write
    #[error("Document is read-only")]
    ReadOnly,
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;
