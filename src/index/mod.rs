//! Load-time tag index
//!
//! Parses the tagging attributes of a rendered document exactly once and keeps
//! a typed view of it:
//! - **Entries**: elements carrying a non-empty searchable tag list, with their
//!   parsed searchable and category tag sets
//! - **Cards**: container elements and each node's nearest enclosing card
//! - **Roles**: which elements act as searchable entries or as the facet toggle
//!
//! Matching and click classification run entirely against this index, so the
//! surface is only written to after load.

use crate::config::MarkupConfig;
use crate::dom::{NodeId, Surface};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, warn};

/// Tree navigation needed to expose the cards around a match
pub trait CardTree {
    /// Nearest strict ancestor of `node` that is a card
    fn parent_card(&self, node: NodeId) -> Option<NodeId>;
}

impl<T: CardTree + ?Sized> CardTree for &T {
    fn parent_card(&self, node: NodeId) -> Option<NodeId> {
        (**self).parent_card(node)
    }
}

impl CardTree for HashMap<NodeId, NodeId> {
    fn parent_card(&self, node: NodeId) -> Option<NodeId> {
        self.get(&node).copied()
    }
}

/// Parsed tags of one entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryTags {
    pub searchable: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl EntryTags {
    /// Build from raw attribute values
    #[must_use]
    pub fn parse(searchable: &str, categories: Option<&str>) -> Self {
        Self {
            searchable: split_tags(searchable),
            categories: categories.map(split_tags).unwrap_or_default(),
        }
    }

    /// Shares at least one searchable tag with `tags`
    #[must_use]
    pub fn intersects(&self, tags: &BTreeSet<String>) -> bool {
        // iterate the smaller side
        if self.searchable.len() <= tags.len() {
            self.searchable.iter().any(|t| tags.contains(t))
        } else {
            tags.iter().any(|t| self.searchable.contains(t))
        }
    }

    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }
}

/// Split a whitespace separated token list into a set
#[must_use]
pub fn split_tags(raw: &str) -> BTreeSet<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Role of the element a click resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Closest searchable element, with parsed tags
    Searchable(NodeId),
    /// Closest searchable element carries the attribute but no tags
    MalformedSearchable(NodeId),
    /// Inside the facet toggle control
    Toggle(NodeId),
}

/// Typed view of the document's tagging data
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    entries: BTreeMap<NodeId, EntryTags>,
    malformed: BTreeSet<NodeId>,
    cards: BTreeSet<NodeId>,
    toggles: BTreeSet<NodeId>,
    parents: HashMap<NodeId, Option<NodeId>>,
    parent_cards: HashMap<NodeId, NodeId>,
}

impl TagIndex {
    /// Index every element of `surface`
    #[must_use]
    pub fn build<S: Surface + ?Sized>(surface: &S, markup: &MarkupConfig) -> Self {
        let mut index = Self::default();

        // pre-order guarantees a parent is indexed before its children
        for node in surface.nodes() {
            let parent = surface.parent(node);
            index.parents.insert(node, parent);
            if let Some(parent) = parent {
                let card = if index.cards.contains(&parent) {
                    Some(parent)
                } else {
                    index.parent_cards.get(&parent).copied()
                };
                if let Some(card) = card {
                    index.parent_cards.insert(node, card);
                }
            }

            if surface.has_class(node, &markup.card_class) {
                index.cards.insert(node);
            }

            if surface.element_id(node).as_deref() == Some(markup.toggle_id.as_str()) {
                index.toggles.insert(node);
            }

            if let Some(raw) = surface.attribute(node, &markup.searchable_attribute) {
                let category = surface.attribute(node, &markup.category_attribute);
                let tags = EntryTags::parse(&raw, category.as_deref());
                if tags.searchable.is_empty() {
                    warn!(%node, "searchable element without tags");
                    index.malformed.insert(node);
                } else {
                    index.entries.insert(node, tags);
                }
            }
        }

        debug!(
            entries = index.entries.len(),
            cards = index.cards.len(),
            toggles = index.toggles.len(),
            malformed = index.malformed.len(),
            "built tag index"
        );
        index
    }

    /// Tags of an entry
    #[must_use]
    pub fn entry(&self, node: NodeId) -> Option<&EntryTags> {
        self.entries.get(&node)
    }

    /// All entries in document order
    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<NodeId, EntryTags> {
        &self.entries
    }

    #[must_use]
    pub fn is_card(&self, node: NodeId) -> bool {
        self.cards.contains(&node)
    }

    /// Number of indexed cards
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Resolve a click target to the closest element with a role
    ///
    /// The searchable role wins over the toggle role: the whole ancestor chain
    /// (starting at `target` itself) is searched for an entry before it is
    /// searched for the toggle. Nodes unknown to the index resolve to `None`.
    #[must_use]
    pub fn classify(&self, target: NodeId) -> Option<ClickTarget> {
        let chain: Vec<NodeId> = self.ancestors_inclusive(target).collect();

        let searchable = chain.iter().find_map(|&node| {
            if self.entries.contains_key(&node) {
                Some(ClickTarget::Searchable(node))
            } else if self.malformed.contains(&node) {
                Some(ClickTarget::MalformedSearchable(node))
            } else {
                None
            }
        });

        searchable.or_else(|| {
            chain
                .iter()
                .copied()
                .find(|node| self.toggles.contains(node))
                .map(ClickTarget::Toggle)
        })
    }

    fn ancestors_inclusive(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let start = self.parents.contains_key(&node).then_some(node);
        std::iter::successors(start, |n| self.parents.get(n).copied().flatten())
    }
}

impl CardTree for TagIndex {
    fn parent_card(&self, node: NodeId) -> Option<NodeId> {
        self.parent_cards.get(&node).copied()
    }
}
