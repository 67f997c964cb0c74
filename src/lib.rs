//! Timbertrees - faceted highlighting for tagged card catalogs
//!
//! A rendered catalog page groups entries (goods, needs, resources) into
//! nested cards. Clicking an entry highlights every entry sharing one of its
//! tags, exposes the cards that contain them, and keeps the clicked entry
//! where it was on screen. A toggle control narrows the highlight to producers
//! or consumers.
//!
//! ```
//! use timbertrees::config::HighlightConfig;
//! use timbertrees::controller::{ClickOutcome, HighlightController};
//! use timbertrees::dom::{Document, Element, NodeId, Surface};
//! use timbertrees::scroll::Viewport;
//!
//! struct Page(Document);
//!
//! impl Surface for Page {
//!     fn nodes(&self) -> Vec<NodeId> { self.0.nodes() }
//!     fn parent(&self, n: NodeId) -> Option<NodeId> { self.0.parent(n) }
//!     fn attribute(&self, n: NodeId, a: &str) -> Option<String> { self.0.attribute(n, a) }
//!     fn element_id(&self, n: NodeId) -> Option<String> { self.0.element_id(n) }
//!     fn has_class(&self, n: NodeId, c: &str) -> bool { self.0.has_class(n, c) }
//!     fn nodes_with_class(&self, c: &str) -> Vec<NodeId> { self.0.nodes_with_class(c) }
//!     fn set_class(&mut self, n: NodeId, c: &str, on: bool) { self.0.set_class(n, c, on) }
//!     fn set_root_attribute(&mut self, a: &str, v: Option<&str>) { self.0.set_root_attribute(a, v) }
//! }
//!
//! impl Viewport for Page {
//!     fn top_of(&self, _: NodeId) -> f64 { 0.0 }
//!     fn scroll_by(&mut self, _: f64) {}
//! }
//!
//! let mut doc = Document::new("body");
//! let card = doc.append(doc.root(), Element::new("div").with_class("card"));
//! let entry = doc.append(card, Element::new("li").with_attribute("data-searchable", "log"));
//! let mut page = Page(doc);
//!
//! let mut controller = HighlightController::new(&page, HighlightConfig::default());
//! let outcome = controller.handle_click(&mut page, entry)?;
//!
//! assert_eq!(outcome, ClickOutcome::SearchStarted { found: 1, exposed: 1 });
//! assert!(page.has_class(card, "exposed"));
//! # Ok::<(), timbertrees::search::SearchError>(())
//! ```

use thiserror::Error;

pub mod config;
pub mod controller;
pub mod dom;
pub mod index;
pub mod scroll;
pub mod search;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

#[cfg(test)]
pub mod testing;

pub use controller::{ClickOutcome, HighlightController};

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum TimbertreesError {
    /// Document snapshot could not be loaded
    #[error("Document error: {0}")]
    DomError(#[from] dom::DomError),
    /// Click handling hit malformed markup
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
}
