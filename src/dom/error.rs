//! Document loading errors

use thiserror::Error;

/// Errors raised while loading a rendered document snapshot
#[derive(Debug, Error)]
pub enum DomError {
    /// I/O error when reading a snapshot file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot is not valid JSON or does not describe an element tree
    #[error("Invalid document snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Element has an empty tag name
    #[error("Element at depth {0} has an empty tag name")]
    EmptyTag(usize),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, DomError>;
