//! Match computation and mark application
//!
//! Matching rules:
//! - An entry matches when it shares **at least one** searchable tag with the
//!   active set (union of matches, not intersection)
//! - An active facet additionally requires the entry to carry that category
//! - Every card enclosing a match, up to the root, is exposed
//!
//! [`MatchEngine::recompute`] always produces the complete mark set, and
//! [`Highlight::apply`] always wipes the previous marks before writing, so an
//! empty tag set is simply the "clear everything" case of the same path.

use super::state::Facet;
use crate::config::MarkupConfig;
use crate::dom::{NodeId, Surface};
use crate::index::{CardTree, EntryTags};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Full set of derived marks for one selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    /// Entries satisfying the tag and facet filter
    pub found: BTreeSet<NodeId>,
    /// Cards transitively containing a found entry
    pub exposed: BTreeSet<NodeId>,
}

impl Highlight {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.found.is_empty() && self.exposed.is_empty()
    }

    /// Replace every found/exposed mark on `surface` with this set
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S, markup: &MarkupConfig) {
        for class in [&markup.found_class, &markup.exposed_class] {
            for node in surface.nodes_with_class(class) {
                surface.set_class(node, class, false);
            }
        }
        for &node in &self.found {
            surface.set_class(node, &markup.found_class, true);
        }
        for &node in &self.exposed {
            surface.set_class(node, &markup.exposed_class, true);
        }
    }
}

/// Computes which entries are found and which cards are exposed
pub struct MatchEngine<'a, T: CardTree> {
    entries: &'a BTreeMap<NodeId, EntryTags>,
    tree: T,
}

impl<'a, T: CardTree> MatchEngine<'a, T> {
    #[must_use]
    pub const fn new(entries: &'a BTreeMap<NodeId, EntryTags>, tree: T) -> Self {
        Self { entries, tree }
    }

    /// Whether one entry satisfies the filter
    #[must_use]
    pub fn matches(entry: &EntryTags, tags: &BTreeSet<String>, category: Option<Facet>) -> bool {
        entry.intersects(tags) && category.is_none_or(|facet| entry.has_category(facet.as_str()))
    }

    /// Compute the complete mark set for `tags` and `category`
    ///
    /// Empty `tags` yields an empty highlight regardless of `category`.
    #[must_use]
    pub fn recompute(&self, tags: &BTreeSet<String>, category: Option<Facet>) -> Highlight {
        let mut highlight = Highlight::default();
        if tags.is_empty() {
            return highlight;
        }

        highlight.found = self
            .entries
            .iter()
            .filter(|(_, entry)| Self::matches(entry, tags, category))
            .map(|(&node, _)| node)
            .collect();

        for &node in &highlight.found {
            let mut card = self.tree.parent_card(node);
            while let Some(current) = card {
                // everything above an exposed card is already exposed
                if !highlight.exposed.insert(current) {
                    break;
                }
                card = self.tree.parent_card(current);
            }
        }

        trace!(
            found = highlight.found.len(),
            exposed = highlight.exposed.len(),
            ?category,
            "recomputed highlight"
        );
        highlight
    }
}
