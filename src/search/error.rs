//! Search-specific error types
//!
//! Click handling has a single failure mode: the user clicked an element that
//! claims the searchable role but carries no tags. That is a defect in the
//! rendered markup, not something the engine can recover from, so it is
//! surfaced to the caller instead of being ignored.

use crate::dom::NodeId;
use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Searchable element has an empty tag list
    #[error("Searchable element {0} has no tags")]
    MalformedEntry(NodeId),
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
