//! Core trait for the document abstraction layer

use super::types::NodeId;

/// Read/write capability over a rendered document
///
/// The read half is only consulted while building a
/// [`TagIndex`](crate::index::TagIndex); after that the engine writes marks
/// and state attributes and never reads tagging data again.
///
/// Implemented by the in-memory [`Document`](super::Document) and, for
/// browser builds, by the `web_sys` backed surface.
pub trait Surface {
    /// All element ids in document order (pre-order, parents before children)
    fn nodes(&self) -> Vec<NodeId>;

    /// Direct parent element
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Attribute value, `None` when the attribute is absent
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Element id, `None` when absent or empty
    fn element_id(&self, node: NodeId) -> Option<String>;

    /// Class membership
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Every element currently carrying `class`
    fn nodes_with_class(&self, class: &str) -> Vec<NodeId>;

    /// Add (`on = true`) or remove a class
    fn set_class(&mut self, node: NodeId, class: &str, on: bool);

    /// Set or remove (`None`) an attribute on the document root
    fn set_root_attribute(&mut self, name: &str, value: Option<&str>);
}
