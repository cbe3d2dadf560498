//! Element Resolution
//!
//! Looks up, once at initialization, every element the behavior is wired
//! to. Geometry is not cached; it is read from the document on each event.

use kernel::id::NodeId;

use crate::application::config::CompiledSelectors;
use crate::domain::document::Document;
use crate::domain::value_objects::Selector;
use crate::error::{PageError, PageResult};

/// A `section[id]` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub node: NodeId,
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct PageElements {
    pub body: NodeId,
    pub nav: NodeId,
    pub nav_toggle: NodeId,
    pub mobile_menu: NodeId,
    pub anchor_links: Vec<NodeId>,
    pub mobile_menu_links: Vec<NodeId>,
    pub nav_links: Vec<NodeId>,
    pub sections: Vec<Section>,
    pub reveal_targets: Vec<NodeId>,
    pub timeline_items: Vec<NodeId>,
    pub skill_categories: Vec<NodeId>,
}

impl PageElements {
    pub fn resolve<D: Document + ?Sized>(
        doc: &D,
        selectors: &CompiledSelectors,
    ) -> PageResult<Self> {
        let sections = doc
            .query_selector_all(&selectors.sections)
            .into_iter()
            .filter_map(|node| {
                let id = doc.attribute(node, "id")?;
                Some(Section {
                    node,
                    id: id.to_string(),
                })
            })
            .collect();

        let elements = Self {
            body: doc.body(),
            nav: required(doc, &selectors.nav)?,
            nav_toggle: required(doc, &selectors.nav_toggle)?,
            mobile_menu: required(doc, &selectors.mobile_menu)?,
            anchor_links: doc.query_selector_all(&selectors.anchor_links),
            mobile_menu_links: doc.query_selector_all(&selectors.mobile_menu_links),
            nav_links: doc.query_selector_all(&selectors.nav_links),
            sections,
            reveal_targets: doc.query_selector_all(&selectors.reveal_targets),
            timeline_items: doc.query_selector_all(&selectors.timeline_items),
            skill_categories: doc.query_selector_all(&selectors.skill_categories),
        };

        tracing::debug!(
            anchor_links = elements.anchor_links.len(),
            nav_links = elements.nav_links.len(),
            sections = elements.sections.len(),
            reveal_targets = elements.reveal_targets.len(),
            "Page elements resolved"
        );
        Ok(elements)
    }

    pub fn is_anchor_link(&self, node: NodeId) -> bool {
        self.anchor_links.contains(&node)
    }

    pub fn is_mobile_menu_link(&self, node: NodeId) -> bool {
        self.mobile_menu_links.contains(&node)
    }
}

fn required<D: Document + ?Sized>(doc: &D, selector: &Selector) -> PageResult<NodeId> {
    doc.query_selector(selector)
        .ok_or_else(|| PageError::MissingElement(selector.to_string()))
}
