//! In-memory rendered document
//!
//! An arena of [`Element`]s linked by parent/child ids. Node 0 is always the
//! root. Document order is the pre-order walk from the root, so elements may
//! be appended in any order without affecting [`Surface::nodes`].

use super::error::{DomError, Result};
use super::traits::Surface;
use super::types::{Element, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
struct Slot {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed element tree
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
}

/// Serialized form of an element subtree
///
/// This is the shape a renderer dumps for a page:
///
/// ```json
/// {
///   "tag": "div",
///   "class": "building card",
///   "children": [
///     { "tag": "li", "attributes": { "data-searchable": "log", "data-category": "consumer" } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeSpec {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Space separated class list
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    fn to_element(&self) -> Element {
        let mut element = Element::new(self.tag.clone()).with_class(&self.class);
        element.id = self.id.clone().filter(|id| !id.is_empty());
        element.attributes = self.attributes.clone();
        element
    }
}

impl Document {
    /// Create a document holding only a root element
    #[must_use]
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self::with_root(Element::new(root_tag))
    }

    /// Create a document from a prepared root element
    #[must_use]
    pub fn with_root(root: Element) -> Self {
        Self {
            slots: vec![Slot {
                element: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root element id
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Append `element` as the last child of `parent`
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        assert!(parent.index() < self.slots.len(), "unknown parent {parent}");
        let id = NodeId::new(self.slots.len());
        self.slots.push(Slot {
            element,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.slots[parent.index()].children.push(id);
        id
    }

    /// Look up an element
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.slots.get(node.index()).map(|slot| &slot.element)
    }

    /// Child ids in order
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.slots
            .get(node.index())
            .map_or(&[], |slot| slot.children.as_slice())
    }

    /// Build a document from a snapshot tree
    ///
    /// # Errors
    ///
    /// Returns `DomError::EmptyTag` if any element has an empty tag name.
    pub fn from_snapshot(spec: &NodeSpec) -> Result<Self> {
        if spec.tag.is_empty() {
            return Err(DomError::EmptyTag(0));
        }
        let mut doc = Self::with_root(spec.to_element());
        let mut stack: Vec<(NodeId, &NodeSpec, usize)> = spec
            .children
            .iter()
            .rev()
            .map(|child| (NodeId::new(0), child, 1))
            .collect();

        while let Some((parent, child, depth)) = stack.pop() {
            if child.tag.is_empty() {
                return Err(DomError::EmptyTag(depth));
            }
            let id = doc.append(parent, child.to_element());
            stack.extend(child.children.iter().rev().map(|c| (id, c, depth + 1)));
        }

        Ok(doc)
    }

    /// Parse a JSON snapshot
    ///
    /// # Errors
    ///
    /// Returns `DomError::Snapshot` for malformed JSON and `DomError::EmptyTag`
    /// for elements without a tag name.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: NodeSpec = serde_json::from_str(json)?;
        Self::from_snapshot(&spec)
    }

    /// Load a JSON snapshot from disk
    ///
    /// # Errors
    ///
    /// Returns `DomError::Io` if the file cannot be read, otherwise the same
    /// errors as [`Document::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Convert back into a snapshot tree (marks and state attributes included)
    #[must_use]
    pub fn to_snapshot(&self) -> NodeSpec {
        self.spec_of(self.root())
    }

    fn spec_of(&self, node: NodeId) -> NodeSpec {
        let slot = &self.slots[node.index()];
        NodeSpec {
            tag: slot.element.tag.clone(),
            id: slot.element.id.clone(),
            class: slot
                .element
                .classes
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
            attributes: slot.element.attributes.clone(),
            children: slot.children.iter().map(|&c| self.spec_of(c)).collect(),
        }
    }
}

impl Surface for Document {
    fn nodes(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.slots.len());
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        order
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.slots.get(node.index()).and_then(|slot| slot.parent)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.attributes.get(name).cloned()
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        self.element(node)?.id.clone()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.has_class(class))
    }

    fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.element.has_class(class))
            .map(|(i, _)| NodeId::new(i))
            .collect()
    }

    fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        let Some(slot) = self.slots.get_mut(node.index()) else {
            return;
        };
        if on {
            slot.element.classes.insert(class.to_string());
        } else {
            slot.element.classes.remove(class);
        }
    }

    fn set_root_attribute(&mut self, name: &str, value: Option<&str>) {
        let attributes = &mut self.slots[0].element.attributes;
        match value {
            Some(value) => {
                attributes.insert(name.to_string(), value.to_string());
            }
            None => {
                attributes.remove(name);
            }
        }
    }
}
