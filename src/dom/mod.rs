//! Rendered document model
//!
//! The highlight engine never talks to a rendering surface directly. Everything
//! it needs from the page goes through the [`Surface`] trait:
//! - **Reading** tagging attributes, classes and parent links once at load time
//! - **Writing** the found/exposed classes and the two document state attributes
//!
//! [`Document`] is the in-memory implementation. It can be built node by node
//! or loaded from a JSON snapshot of the rendered catalog.
//!
//! # Examples
//!
//! ```
//! use timbertrees::dom::{Document, Element, Surface};
//!
//! let mut doc = Document::new("body");
//! let card = doc.append(doc.root(), Element::new("div").with_class("card"));
//! let entry = doc.append(card, Element::new("li").with_attribute("data-searchable", "log plank"));
//!
//! assert_eq!(doc.parent(entry), Some(card));
//! assert_eq!(doc.attribute(entry, "data-searchable").as_deref(), Some("log plank"));
//! ```

pub mod document;
pub mod error;
pub mod traits;
pub mod types;

pub use document::{Document, NodeSpec};
pub use error::{DomError, Result};
pub use traits::Surface;
pub use types::{Element, NodeId};
