//! Document Trait
//!
//! Interface to a DOM-like page. The behavior layer only ever talks to the
//! page through this trait, passed in explicitly at initialization.
//! Implementation is in infrastructure layer.

use kernel::id::NodeId;

use crate::domain::value_objects::{Rect, ScrollBehavior, Selector, Viewport};

/// DOM-like page handle
pub trait Document {
    /// Every element, in document (pre-)order
    fn nodes(&self) -> Vec<NodeId>;

    fn body(&self) -> NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Lower-case tag name
    fn tag_name(&self, node: NodeId) -> &str;

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Class names in attribute order
    fn class_names(&self, node: NodeId) -> Vec<&str>;

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Inline style value, `None` when unset
    fn style(&self, node: NodeId, property: &str) -> Option<&str>;

    /// Set an inline style; an empty value removes the property
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Offset top and height in document coordinates
    fn geometry(&self, node: NodeId) -> Rect;

    fn viewport(&self) -> Viewport;

    /// Programmatic scroll; the implementation clamps to the scrollable range
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);

    /// Place the viewport where the user scrolled it (clamped like `scroll_to`)
    fn set_scroll_y(&mut self, scroll_y: f64);

    fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.nodes()
            .into_iter()
            .filter(|&node| selector.matches(self, node))
            .collect()
    }

    fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.nodes()
            .into_iter()
            .find(|&node| selector.matches(self, node))
    }

    /// `node` followed by its ancestors, innermost first
    fn ancestors_inclusive(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = vec![node];
        let mut cursor = self.parent(node);
        while let Some(parent) = cursor {
            chain.push(parent);
            cursor = self.parent(parent);
        }
        chain
    }
}
