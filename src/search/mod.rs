//! Faceted search over the tag index
//!
//! - [`SelectionState`]: the active tags and facet
//! - [`MatchEngine`]: turns a selection into a [`Highlight`]
//! - [`Highlight`]: the found/exposed mark set, applied to a surface in one go

pub mod engine;
pub mod error;
pub mod state;

pub use engine::{Highlight, MatchEngine};
pub use error::SearchError;
pub use state::{Facet, SelectionState};
