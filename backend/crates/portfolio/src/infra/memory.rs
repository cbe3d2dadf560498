//! In-memory Document
//!
//! Arena-backed [`Document`] used by the replay binary and by tests. Node
//! geometry is given up front; scrolling is clamped to the height spanned
//! by the laid-out elements.

use std::collections::BTreeMap;

use kernel::id::NodeId;

use crate::domain::document::Document;
use crate::domain::value_objects::{Rect, ScrollBehavior, Viewport};

/// Element description for [`MemoryDocument::append`]
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    rect: Rect,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn rect(mut self, top: f64, height: f64) -> Self {
        self.rect = Rect::new(top, height);
        self
    }
}

/// A programmatic scroll, as requested by the behavior layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub requested_top: f64,
    pub applied_top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    rect: Rect,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl From<ElementSpec> for NodeData {
    fn from(spec: ElementSpec) -> Self {
        Self {
            tag: spec.tag,
            classes: spec.classes,
            attributes: spec.attributes,
            styles: BTreeMap::new(),
            rect: spec.rect,
            parent: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<NodeData>,
    body: NodeId,
    viewport: Viewport,
    scroll_log: Vec<ScrollRequest>,
}

impl MemoryDocument {
    /// Empty document holding only `<body>`, scrolled to the top
    pub fn new(viewport_height: f64) -> Self {
        Self {
            nodes: vec![NodeData::from(ElementSpec::new("body"))],
            body: NodeId::from_index(0),
            viewport: Viewport::new(0.0, viewport_height),
            scroll_log: Vec::new(),
        }
    }

    /// Append `spec` as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        let mut data = NodeData::from(spec);
        data.parent = Some(parent);
        self.nodes.push(data);
        self.node_mut(parent).children.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // <body> always exists
        false
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.node(node).classes
    }

    /// Bottom edge of the lowest element
    pub fn content_height(&self) -> f64 {
        self.nodes
            .iter()
            .map(|n| n.rect.bottom())
            .fold(0.0, f64::max)
    }

    /// Largest reachable scroll offset
    pub fn max_scroll(&self) -> f64 {
        (self.content_height() - self.viewport.height).max(0.0)
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport.height = height;
        self.viewport.scroll_y = self.viewport.scroll_y.clamp(0.0, self.max_scroll());
    }

    /// Every programmatic scroll so far, oldest first
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_log
    }

    fn node(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.as_usize()]
    }

    fn node_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.as_usize()]
    }
}

impl Document for MemoryDocument {
    fn nodes(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.body];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.node(node).children.iter().rev().copied());
        }
        order
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn tag_name(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).attributes.get(name).map(String::as_str)
    }

    fn class_names(&self, node: NodeId) -> Vec<&str> {
        self.node(node).classes.iter().map(String::as_str).collect()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.node_mut(node).classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.node_mut(node).classes.retain(|c| c != class);
    }

    fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.node(node).styles.get(property).map(String::as_str)
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        let styles = &mut self.node_mut(node).styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn geometry(&self, node: NodeId) -> Rect {
        self.node(node).rect
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let applied = top.clamp(0.0, self.max_scroll());
        tracing::trace!(requested = top, applied, %behavior, "Viewport scrolled");
        self.viewport.scroll_y = applied;
        self.scroll_log.push(ScrollRequest {
            requested_top: top,
            applied_top: applied,
            behavior,
        });
    }

    /// Not recorded in the scroll log
    fn set_scroll_y(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y.clamp(0.0, self.max_scroll());
    }
}
