//! Testing utilities for timbertrees
//!
//! Provides a layout-aware document and a small catalog resembling a rendered
//! faction page, so click handling can be exercised end to end including the
//! scroll correction.
//!
//! Only available when compiled with `cfg(test)`.

use crate::config::MarkupConfig;
use crate::dom::{Document, Element, NodeId, Surface};
use crate::scroll::Viewport;
use std::collections::HashMap;

/// Extra height a found entry gains from its emphasis styling
pub const FOUND_EXTRA: f64 = 50.0;

/// A [`Document`] with a toy stylesheet and a scroll position
///
/// Layout rules, mirroring the stock stylesheet:
/// - every element has its own fixed height (default 0) and elements stack
///   vertically in document order
/// - found elements grow by [`FOUND_EXTRA`]
/// - while a search is active, a card that is not exposed collapses to its own
///   height and everything inside it is hidden
pub struct LayoutDocument {
    doc: Document,
    heights: HashMap<NodeId, f64>,
    scroll: f64,
    markup: MarkupConfig,
}

impl LayoutDocument {
    pub fn new(root_tag: &str) -> Self {
        Self {
            doc: Document::new(root_tag),
            heights: HashMap::new(),
            scroll: 0.0,
            markup: MarkupConfig::default(),
        }
    }

    /// Append an element with its own rendered height
    pub fn append(&mut self, parent: NodeId, element: Element, height: f64) -> NodeId {
        let node = self.doc.append(parent, element);
        self.heights.insert(node, height);
        node
    }

    pub const fn doc(&self) -> &Document {
        &self.doc
    }

    pub const fn scroll(&self) -> f64 {
        self.scroll
    }

    fn searching(&self) -> bool {
        self.doc
            .attribute(self.doc.root(), &self.markup.search_state_attribute)
            .is_some()
    }

    fn collapsed(&self, node: NodeId) -> bool {
        self.searching()
            && self.doc.has_class(node, &self.markup.card_class)
            && !self.doc.has_class(node, &self.markup.exposed_class)
    }

    fn hidden(&self, node: NodeId) -> bool {
        std::iter::successors(self.doc.parent(node), |&n| self.doc.parent(n))
            .any(|ancestor| self.collapsed(ancestor))
    }

    fn rendered_height(&self, node: NodeId) -> f64 {
        if self.hidden(node) {
            return 0.0;
        }
        let own = self.heights.get(&node).copied().unwrap_or(0.0);
        if self.doc.has_class(node, &self.markup.found_class) {
            own + FOUND_EXTRA
        } else {
            own
        }
    }
}

impl Surface for LayoutDocument {
    fn nodes(&self) -> Vec<NodeId> {
        self.doc.nodes()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.doc.parent(node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.doc.attribute(node, name)
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        self.doc.element_id(node)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.doc.has_class(node, class)
    }

    fn nodes_with_class(&self, class: &str) -> Vec<NodeId> {
        self.doc.nodes_with_class(class)
    }

    fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        self.doc.set_class(node, class, on);
    }

    fn set_root_attribute(&mut self, name: &str, value: Option<&str>) {
        self.doc.set_root_attribute(name, value);
    }
}

impl Viewport for LayoutDocument {
    fn top_of(&self, node: NodeId) -> f64 {
        let above: f64 = self
            .doc
            .nodes()
            .into_iter()
            .take_while(|&n| n != node)
            .map(|n| self.rendered_height(n))
            .sum();
        above - self.scroll
    }

    fn scroll_by(&mut self, dy: f64) {
        self.scroll += dy;
    }
}

/// A small rendered catalog
///
/// ```text
/// body
///   h1                                   160
///   div#toggle > span                    20
///   div#content.card
///     div.toolgroup.card   (wood)        30
///       div.recipe.card    (planks)      30
///         li plank x3 consumer           20 each
///         li plank producer              20   <- top 300
///       div.building.card  (lumberjack)  30
///         li log producer                20
///       div.building.card  (sawmill)     30
///         li log consumer > span         20
///         li data-searchable=""          20
///     div.toolgroup.card   (industry)    30
///       div.building.card  (smelter)     30
///         li log consumer                20
///     div.toolgroup.card   (waterworks)  30
///       div.building.card  (pump)        30
///         li water producer              20
/// ```
pub struct Catalog {
    pub page: LayoutDocument,
    pub heading: NodeId,
    pub toggle: NodeId,
    pub toggle_label: NodeId,
    pub plank_product: NodeId,
    pub log_product: NodeId,
    pub log_cost: NodeId,
    pub log_cost_label: NodeId,
    pub untagged: NodeId,
    pub log_fuel: NodeId,
    pub water_product: NodeId,
}

fn entry(tags: &str, category: &str) -> Element {
    Element::new("li")
        .with_attribute("data-searchable", tags)
        .with_attribute("data-category", category)
}

fn card(kind: &str) -> Element {
    Element::new("div").with_class(&format!("{kind} card"))
}

impl Catalog {
    /// Catalog with the toggle above the content
    pub fn build() -> Self {
        Self::assemble(false)
    }

    /// Catalog with the toggle after the content
    pub fn build_with_toggle_below() -> Self {
        Self::assemble(true)
    }

    fn assemble(toggle_below: bool) -> Self {
        let mut page = LayoutDocument::new("body");
        let body = page.doc().root();

        let heading = page.append(body, Element::new("h1"), 160.0);
        let (mut toggle, mut toggle_label) = (body, body);
        let mut add_toggle = |page: &mut LayoutDocument| {
            toggle = page.append(body, Element::new("div").with_id("toggle"), 20.0);
            toggle_label = page.append(toggle, Element::new("span").with_class("producers"), 0.0);
        };
        if !toggle_below {
            add_toggle(&mut page);
        }

        let content = page.append(body, card("").with_id("content"), 0.0);

        let wood = page.append(content, card("toolgroup"), 30.0);
        let planks = page.append(wood, card("recipe"), 30.0);
        for _ in 0..3 {
            page.append(planks, entry("plank", "consumer"), 20.0);
        }
        let plank_product = page.append(planks, entry("plank", "producer"), 20.0);

        let lumberjack = page.append(wood, card("building"), 30.0);
        let log_product = page.append(lumberjack, entry("log", "producer"), 20.0);

        let sawmill = page.append(wood, card("building"), 30.0);
        let log_cost = page.append(sawmill, entry("log", "consumer"), 20.0);
        let log_cost_label = page.append(log_cost, Element::new("span"), 0.0);
        let untagged = page.append(
            sawmill,
            Element::new("li").with_attribute("data-searchable", ""),
            20.0,
        );

        let industry = page.append(content, card("toolgroup"), 30.0);
        let smelter = page.append(industry, card("building"), 30.0);
        let log_fuel = page.append(smelter, entry("log", "consumer"), 20.0);

        let waterworks = page.append(content, card("toolgroup"), 30.0);
        let pump = page.append(waterworks, card("building"), 30.0);
        let water_product = page.append(pump, entry("water", "producer"), 20.0);

        if toggle_below {
            add_toggle(&mut page);
        }

        Self {
            page,
            heading,
            toggle,
            toggle_label,
            plank_product,
            log_product,
            log_cost,
            log_cost_label,
            untagged,
            log_fuel,
            water_product,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_initial_layout() {
        let catalog = Catalog::build();
        assert!((catalog.page.top_of(catalog.plank_product) - 300.0).abs() < f64::EPSILON);
        assert!((catalog.page.top_of(catalog.heading)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_found_grows_following_content() {
        let mut catalog = Catalog::build();
        let before = catalog.page.top_of(catalog.log_product);

        catalog.page.set_class(catalog.plank_product, "found", true);
        let after = catalog.page.top_of(catalog.log_product);
        assert!((after - before - FOUND_EXTRA).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unexposed_cards_collapse_while_searching() {
        let mut catalog = Catalog::build();
        let before = catalog.page.top_of(catalog.water_product);

        catalog.page.set_root_attribute("data-search", Some("water"));
        // nothing exposed: the top level content card collapses
        assert!(catalog.page.top_of(catalog.water_product) < before);
    }

    #[test]
    fn test_scroll_offsets_tops() {
        let mut catalog = Catalog::build();
        catalog.page.scroll_by(100.0);
        assert!((catalog.page.top_of(catalog.plank_product) - 200.0).abs() < f64::EPSILON);
    }
}
