//! Smooth Scrolling
//!
//! In-page links scroll their target to just below the fixed nav.

use kernel::id::NodeId;

use crate::application::config::BehaviorConfig;
use crate::application::elements::PageElements;
use crate::domain::document::Document;
use crate::domain::services::anchor_scroll_top;
use crate::domain::value_objects::Selector;

/// Element addressed by `link`'s `href`.
///
/// The `href` is used as a selector, so a bare `#` or anything else that
/// does not parse resolves to nothing.
pub fn anchor_target<D: Document + ?Sized>(doc: &D, link: NodeId) -> Option<NodeId> {
    let href = doc.attribute(link, "href")?;
    if !href.starts_with('#') {
        return None;
    }
    match Selector::parse(href) {
        Ok(selector) => doc.query_selector(&selector),
        Err(e) => {
            tracing::debug!(%href, error = %e, "Anchor href is not a selector");
            None
        }
    }
}

/// Scroll to `link`'s target and return the requested offset, or `None`
/// when the link has no target.
pub fn scroll_to_anchor<D: Document + ?Sized>(
    doc: &mut D,
    elements: &PageElements,
    config: &BehaviorConfig,
    link: NodeId,
) -> Option<f64> {
    let target = anchor_target(&*doc, link)?;
    let nav_height = doc.geometry(elements.nav).height;
    let top = anchor_scroll_top(doc.geometry(target), nav_height);
    tracing::debug!(top, behavior = %config.anchor_scroll, "Scrolling to anchor");
    doc.scroll_to(top, config.anchor_scroll);
    Some(top)
}
