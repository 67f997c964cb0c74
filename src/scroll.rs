//! Scroll position correction
//!
//! Highlighting collapses and expands content anywhere in the page. To keep the
//! clicked element under the pointer, its viewport offset is sampled before
//! and after the mutation and the page is scrolled by the difference in one
//! immediate step.

use crate::dom::NodeId;
use tracing::trace;

/// Viewport geometry and scrolling
pub trait Viewport {
    /// Distance from the top of the viewport to the top of `node`
    fn top_of(&self, node: NodeId) -> f64;

    /// Scroll the document by `dy` (positive scrolls down)
    fn scroll_by(&mut self, dy: f64);
}

/// Run `mutate` and keep `node` at the same viewport offset
///
/// # Examples
///
/// ```
/// use timbertrees::dom::NodeId;
/// use timbertrees::scroll::{preserve, Viewport};
///
/// struct Page { content_above: f64, scroll: f64 }
///
/// impl Viewport for Page {
///     fn top_of(&self, _node: NodeId) -> f64 { self.content_above - self.scroll }
///     fn scroll_by(&mut self, dy: f64) { self.scroll += dy; }
/// }
///
/// let mut page = Page { content_above: 300.0, scroll: 0.0 };
/// preserve(&mut page, NodeId::new(1), |page| page.content_above += 150.0);
///
/// assert_eq!(page.top_of(NodeId::new(1)), 300.0);
/// assert_eq!(page.scroll, 150.0);
/// ```
pub fn preserve<V, R>(viewport: &mut V, node: NodeId, mutate: impl FnOnce(&mut V) -> R) -> R
where
    V: Viewport + ?Sized,
{
    let before = viewport.top_of(node);
    let result = mutate(viewport);
    let after = viewport.top_of(node);

    let delta = after - before;
    if delta.abs() > f64::EPSILON {
        trace!(%node, before, after, delta, "correcting scroll");
        viewport.scroll_by(delta);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        top: f64,
        scrolls: Vec<f64>,
    }

    impl Viewport for Recorder {
        fn top_of(&self, _node: NodeId) -> f64 {
            self.top
        }

        fn scroll_by(&mut self, dy: f64) {
            self.scrolls.push(dy);
            self.top -= dy;
        }
    }

    #[test]
    fn test_growth_above_scrolls_down() {
        let mut viewport = Recorder { top: 300.0, ..Recorder::default() };
        preserve(&mut viewport, NodeId::new(0), |v| v.top += 150.0);

        assert_eq!(viewport.scrolls, vec![150.0]);
        assert!((viewport.top - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shrink_above_scrolls_up() {
        let mut viewport = Recorder { top: 300.0, ..Recorder::default() };
        preserve(&mut viewport, NodeId::new(0), |v| v.top -= 120.0);

        assert_eq!(viewport.scrolls, vec![-120.0]);
        assert!((viewport.top - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_movement_no_scroll() {
        let mut viewport = Recorder { top: 300.0, ..Recorder::default() };
        let value = preserve(&mut viewport, NodeId::new(0), |_| 42);

        assert_eq!(value, 42);
        assert!(viewport.scrolls.is_empty());
    }
}
