//! Selection state
//!
//! Holds the active search tags and the active category facet for the lifetime
//! of one loaded document. Only the controller mutates it, and only from inside
//! click handling.
//!
//! ```
//! use timbertrees::search::{Facet, SelectionState};
//!
//! let mut state = SelectionState::default();
//! assert!(!state.cycle_category());
//!
//! state.activate(["log".to_string()].into_iter().collect());
//! assert!(state.cycle_category());
//! assert_eq!(state.category(), Some(Facet::Producer));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One value of the category toggle cycle
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    /// Entries that produce the searched item
    Producer,
    /// Entries that consume the searched item
    Consumer,
}

impl Facet {
    /// Category tag this facet matches
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Consumer => "consumer",
        }
    }

    /// Successor in the cycle `None -> Producer -> Consumer -> None`
    #[must_use]
    pub const fn cycle(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::Producer),
            Some(Self::Producer) => Some(Self::Consumer),
            Some(Self::Consumer) => None,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active tags and facet
///
/// A facet is only ever set while the tag set is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active_tags: BTreeSet<String>,
    category: Option<Facet>,
}

impl SelectionState {
    /// Whether a search is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.active_tags.is_empty()
    }

    #[must_use]
    pub const fn active_tags(&self) -> &BTreeSet<String> {
        &self.active_tags
    }

    #[must_use]
    pub const fn category(&self) -> Option<Facet> {
        self.category
    }

    /// Start a search for `tags` with no facet
    ///
    /// An empty set is the same as [`SelectionState::clear`].
    pub fn activate(&mut self, tags: BTreeSet<String>) {
        self.active_tags = tags;
        self.category = None;
    }

    /// Turn the search off
    pub fn clear(&mut self) {
        self.active_tags.clear();
        self.category = None;
    }

    /// Advance the facet, returning false (and changing nothing) when no
    /// search is active
    pub fn cycle_category(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.category = Facet::cycle(self.category);
        true
    }

    /// Active tags joined with single spaces, `None` when inactive
    #[must_use]
    pub fn tags_attribute(&self) -> Option<String> {
        self.is_active().then(|| {
            self.active_tags
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}
