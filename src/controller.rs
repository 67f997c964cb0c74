//! Click dispatch
//!
//! [`HighlightController`] owns everything that lives for one loaded document:
//! the tag index, the selection state and the last applied highlight. The
//! surface is borrowed per click, so the controller itself never holds on to
//! the page.
//!
//! Two kinds of clicks are recognised:
//! - **Searchable**: starts a search for the entry's tags, or turns the active
//!   search off. The clicked entry is kept stationary on screen.
//! - **Toggle**: cycles the facet `none -> producer -> consumer -> none` while
//!   a search is active.
//!
//! Anything else is ignored.

use crate::config::{ActiveClick, HighlightConfig};
use crate::dom::{NodeId, Surface};
use crate::index::{ClickTarget, TagIndex};
use crate::scroll::{self, Viewport};
use crate::search::error::{Result, SearchError};
use crate::search::{Facet, Highlight, MatchEngine, SelectionState};
use std::collections::BTreeSet;
use tracing::{debug, error};

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Click had no role, or toggled with no active search
    Ignored,
    /// A search for the clicked entry's tags is now active
    SearchStarted { found: usize, exposed: usize },
    /// The search was turned off
    SearchCleared,
    /// The facet moved to `category`
    CategoryChanged {
        category: Option<Facet>,
        found: usize,
        exposed: usize,
    },
}

/// Faceted highlight controller for one document
#[derive(Debug, Clone)]
pub struct HighlightController {
    config: HighlightConfig,
    index: TagIndex,
    selection: SelectionState,
    highlight: Highlight,
}

impl HighlightController {
    /// Index `surface` and start with no active search
    #[must_use]
    pub fn new<S: Surface + ?Sized>(surface: &S, config: HighlightConfig) -> Self {
        let index = TagIndex::build(surface, &config.markup);
        Self {
            config,
            index,
            selection: SelectionState::default(),
            highlight: Highlight::default(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &HighlightConfig {
        &self.config
    }

    #[must_use]
    pub const fn index(&self) -> &TagIndex {
        &self.index
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Marks currently applied to the surface
    #[must_use]
    pub const fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    /// Handle a click on `target`
    ///
    /// # Errors
    ///
    /// Returns `SearchError::MalformedEntry` when the closest searchable
    /// element has no tags. Nothing is changed in that case.
    pub fn handle_click<S>(&mut self, surface: &mut S, target: NodeId) -> Result<ClickOutcome>
    where
        S: Surface + Viewport + ?Sized,
    {
        match self.index.classify(target) {
            Some(ClickTarget::Searchable(entry)) => Ok(self.searchable_click(surface, entry)),
            Some(ClickTarget::MalformedSearchable(entry)) => {
                error!(%entry, %target, "clicked searchable element has no tags");
                Err(SearchError::MalformedEntry(entry))
            }
            Some(ClickTarget::Toggle(toggle)) => Ok(self.toggle_click(surface, toggle)),
            None => Ok(ClickOutcome::Ignored),
        }
    }

    /// Turn any active search off
    pub fn reset<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.selection.clear();
        self.refresh(surface);
    }

    fn searchable_click<S>(&mut self, surface: &mut S, entry: NodeId) -> ClickOutcome
    where
        S: Surface + Viewport + ?Sized,
    {
        let next = self.next_tags(entry);

        scroll::preserve(surface, entry, |surface| {
            match next {
                Some(tags) => {
                    debug!(%entry, ?tags, "starting search");
                    self.selection.activate(tags);
                }
                None => {
                    debug!(%entry, "clearing search");
                    self.selection.clear();
                }
            }
            self.refresh(surface);
        });

        if self.selection.is_active() {
            ClickOutcome::SearchStarted {
                found: self.highlight.found.len(),
                exposed: self.highlight.exposed.len(),
            }
        } else {
            ClickOutcome::SearchCleared
        }
    }

    /// Tags the selection moves to after clicking `entry`, `None` to clear
    fn next_tags(&self, entry: NodeId) -> Option<BTreeSet<String>> {
        let tags = self.index.entry(entry).map(|e| e.searchable.clone())?;
        if !self.selection.is_active() {
            return Some(tags);
        }
        match self.config.behavior.active_click {
            ActiveClick::Clear => None,
            ActiveClick::Switch if &tags == self.selection.active_tags() => None,
            ActiveClick::Switch => Some(tags),
        }
    }

    fn toggle_click<S>(&mut self, surface: &mut S, toggle: NodeId) -> ClickOutcome
    where
        S: Surface + Viewport + ?Sized,
    {
        if !self.selection.is_active() {
            debug!(%toggle, "facet toggle without active search");
            return ClickOutcome::Ignored;
        }

        if self.config.behavior.preserve_toggle_position {
            scroll::preserve(surface, toggle, |surface| self.cycle_category(surface));
        } else {
            self.cycle_category(surface);
        }

        let category = self.selection.category();
        debug!(?category, found = self.highlight.found.len(), "facet changed");
        ClickOutcome::CategoryChanged {
            category,
            found: self.highlight.found.len(),
            exposed: self.highlight.exposed.len(),
        }
    }

    fn cycle_category<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.selection.cycle_category();
        self.refresh(surface);
    }

    /// Recompute marks from the selection and write them with the state
    /// attributes
    fn refresh<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let engine = MatchEngine::new(self.index.entries(), &self.index);
        self.highlight = engine.recompute(self.selection.active_tags(), self.selection.category());

        let markup = &self.config.markup;
        self.highlight.apply(surface, markup);
        surface.set_root_attribute(
            &markup.search_state_attribute,
            self.selection.tags_attribute().as_deref(),
        );
        surface.set_root_attribute(
            &markup.category_state_attribute,
            self.selection.category().map(Facet::as_str),
        );
    }
}
