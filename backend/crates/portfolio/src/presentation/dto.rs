//! Page Snapshot DTO

use kernel::id::NodeId;
use serde::Serialize;

use crate::application::behavior::PageBehavior;
use crate::domain::document::Document;
use crate::domain::entities::MenuState;

/// Observable page state after a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub scroll_y: f64,
    pub menu: MenuState,
    /// Inline `overflow` of `<body>`
    pub body_overflow: Option<String>,
    /// Inline `box-shadow` of the nav
    pub nav_shadow: Option<String>,
    /// `href`s of the highlighted nav links
    pub active_links: Vec<String>,
    /// Labels (`tag#id.class`) of revealed elements, in document order
    pub revealed: Vec<String>,
    pub loaded: bool,
}

impl PageSnapshot {
    pub fn capture<D: Document>(behavior: &PageBehavior<D>) -> Self {
        let doc = behavior.document();
        let elements = behavior.elements();
        let classes = &behavior.config().classes;

        let active_links = elements
            .nav_links
            .iter()
            .filter(|&&link| doc.has_class(link, &classes.active))
            .filter_map(|&link| doc.attribute(link, "href").map(str::to_string))
            .collect();
        let revealed = elements
            .reveal_targets
            .iter()
            .filter(|&&node| doc.has_class(node, &classes.visible))
            .map(|&node| {
                node_label(
                    &*doc,
                    node,
                    &[classes.reveal.as_str(), classes.visible.as_str()],
                )
            })
            .collect();

        Self {
            scroll_y: doc.viewport().scroll_y,
            menu: behavior.menu_state(),
            body_overflow: doc.style(elements.body, "overflow").map(str::to_string),
            nav_shadow: doc.style(elements.nav, "box-shadow").map(str::to_string),
            active_links,
            revealed,
            loaded: doc.has_class(elements.body, &classes.loaded),
        }
    }
}

/// `tag#id.class` label, leaving out the classes in `skip`
pub fn node_label<D: Document + ?Sized>(doc: &D, node: NodeId, skip: &[&str]) -> String {
    let mut label = doc.tag_name(node).to_string();
    if let Some(id) = doc.attribute(node, "id") {
        label.push('#');
        label.push_str(id);
    }
    for class in doc.class_names(node) {
        if !skip.iter().any(|s| *s == class) {
            label.push('.');
            label.push_str(class);
        }
    }
    label
}
