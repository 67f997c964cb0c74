//! Browser binding
//!
//! Mirrors the live DOM into a [`Surface`] and wires a single document-level
//! click listener to a [`HighlightController`]. Every element is stamped with a
//! `data-node` attribute at load so event targets can be mapped back to the
//! ids the index was built with.
//!
//! ```js
//! import init, { install } from "./timbertrees.js";
//! await init();
//! install();
//! ```

use crate::config::HighlightConfig;
use crate::controller::HighlightController;
use crate::dom::{NodeId, Surface};
use crate::scroll::Viewport;
use crate::search::SearchError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, ScrollBehavior, ScrollToOptions, Window, console};

const NODE_ATTRIBUTE: &str = "data-node";

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Log a failed DOM call; the page keeps going
fn check(result: Result<(), JsValue>, action: &str) {
    if let Err(err) = result {
        warn!(?err, action, "DOM call failed");
    }
}

/// Surface a click error to whoever is looking at the page
fn report(err: &SearchError) {
    error!(%err, "click handling failed");
    console::error_1(&JsValue::from_str(&format!("timbertrees: {err}")));
}

/// `web_sys` backed surface over the whole document
pub struct DomSurface {
    window: Window,
    document: web_sys::Document,
    root: Element,
    elements: Vec<Element>,
    parents: Vec<Option<NodeId>>,
}

impl DomSurface {
    /// Walk the document element tree, stamping ids in document order
    #[must_use]
    pub fn attach(window: Window, document: web_sys::Document) -> Option<Self> {
        let root = document.document_element()?;
        let mut surface = Self {
            window,
            document,
            root: root.clone(),
            elements: Vec::new(),
            parents: Vec::new(),
        };

        let mut stack = vec![(root, None)];
        while let Some((element, parent)) = stack.pop() {
            let id = NodeId::new(surface.elements.len());
            check(
                element.set_attribute(NODE_ATTRIBUTE, &id.index().to_string()),
                "stamp node id",
            );

            let children = element.children();
            for i in (0..children.length()).rev() {
                if let Some(child) = children.item(i) {
                    stack.push((child, Some(id)));
                }
            }
            surface.elements.push(element);
            surface.parents.push(parent);
        }

        debug!(elements = surface.elements.len(), "attached to document");
        Some(surface)
    }

    /// Map an event target to the id of its closest stamped element
    #[must_use]
    pub fn node_of(&self, target: &EventTarget) -> Option<NodeId> {
        let element = target.dyn_ref::<Element>()?;
        let stamped = element
            .closest(&format!("[{NODE_ATTRIBUTE}]"))
            .ok()
            .flatten()?;
        Self::stamp_of(&stamped)
    }

    fn stamp_of(element: &Element) -> Option<NodeId> {
        element
            .get_attribute(NODE_ATTRIBUTE)?
            .parse()
            .ok()
            .map(NodeId::new)
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.index())
    }
}

impl Surface for DomSurface {
    fn nodes(&self) -> Vec<NodeId> {
        (0..self.elements.len()).map(NodeId::new).collect()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(node.index()).copied().flatten()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.get_attribute(name)
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        let id = self.element(node)?.id();
        (!id.is_empty()).then_some(id)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|e| e.class_list().contains(class))
    }

    fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        // live collection, snapshot it before anyone edits classes
        let list = self.document.get_elements_by_class_name(class);
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|element| Self::stamp_of(&element))
            .collect()
    }

    fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        if let Some(element) = self.element(node) {
            check(
                element.class_list().toggle_with_force(class, on).map(drop),
                "toggle class",
            );
        }
    }

    fn set_root_attribute(&mut self, name: &str, value: Option<&str>) {
        let result = match value {
            Some(value) => self.root.set_attribute(name, value),
            None => self.root.remove_attribute(name),
        };
        check(result, "set root attribute");
    }
}

impl Viewport for DomSurface {
    fn top_of(&self, node: NodeId) -> f64 {
        self.element(node)
            .map_or(0.0, |e| e.get_bounding_client_rect().top())
    }

    fn scroll_by(&mut self, dy: f64) {
        // instant even when the stylesheet asks for smooth scrolling
        let options = ScrollToOptions::new();
        options.set_top(dy);
        options.set_behavior(ScrollBehavior::Instant);
        self.window.scroll_by_with_scroll_to_options(&options);
    }
}

/// Attach the highlight controller to the current page with default markup
///
/// Only the first call per page installs a listener.
///
/// # Errors
///
/// Returns an error if there is no window or document, the listener cannot
/// be registered, or a listener is already installed.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    install_with(HighlightConfig::default())
}

/// Attach with configuration given as TOML text
///
/// # Errors
///
/// Same as [`install`], plus configuration parse errors.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(toml: &str) -> Result<(), JsValue> {
    let config = HighlightConfig::from_toml(toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
    install_with(config)
}

fn install_with(config: HighlightConfig) -> Result<(), JsValue> {
    if INSTALLED.get() {
        warn!("highlight controller already installed");
        return Err(JsValue::from_str("timbertrees is already installed"));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let surface = DomSurface::attach(window, document.clone())
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;
    let controller = HighlightController::new(&surface, config);

    let state = Rc::new(RefCell::new((controller, surface)));
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let mut guard = state.borrow_mut();
        let (controller, surface) = &mut *guard;
        let Some(target) = event.target().and_then(|t| surface.node_of(&t)) else {
            return;
        };
        if let Err(err) = controller.handle_click(surface, target) {
            report(&err);
        }
    });

    document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    // listener lives as long as the page
    handler.forget();
    INSTALLED.set(true);
    Ok(())
}
