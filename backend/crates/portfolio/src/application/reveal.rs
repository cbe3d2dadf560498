//! Reveal on Scroll

use std::time::Duration;

use kernel::id::NodeId;

use crate::application::config::BehaviorConfig;
use crate::application::elements::PageElements;
use crate::domain::document::Document;
use crate::domain::services::{css_seconds, is_revealed, stagger_delay};

const TRANSITION_DELAY: &str = "transition-delay";

/// Mark every reveal target and stagger the grouped ones
pub fn prepare<D: Document + ?Sized>(doc: &mut D, elements: &PageElements, config: &BehaviorConfig) {
    for &node in &elements.reveal_targets {
        doc.add_class(node, &config.classes.reveal);
    }
    stagger(doc, &elements.timeline_items, config.timeline_stagger);
    stagger(doc, &elements.skill_categories, config.skill_stagger);
}

/// Give the `i`-th node a transition delay of `i * step`
pub fn stagger<D: Document + ?Sized>(doc: &mut D, nodes: &[NodeId], step: Duration) {
    for (index, &node) in nodes.iter().enumerate() {
        doc.set_style(node, TRANSITION_DELAY, &css_seconds(stagger_delay(index, step)));
    }
}

/// Reveal targets now in view; returns how many were newly revealed.
///
/// Revealed elements stay revealed.
pub fn observe<D: Document + ?Sized>(
    doc: &mut D,
    elements: &PageElements,
    config: &BehaviorConfig,
) -> usize {
    let viewport = doc.viewport();
    let visible = &config.classes.visible;
    let entering: Vec<NodeId> = elements
        .reveal_targets
        .iter()
        .copied()
        .filter(|&node| !doc.has_class(node, visible))
        .filter(|&node| {
            is_revealed(
                doc.geometry(node),
                viewport,
                config.reveal_bottom_margin,
                config.reveal_threshold,
            )
        })
        .collect();

    for &node in &entering {
        doc.add_class(node, visible);
    }
    if !entering.is_empty() {
        tracing::debug!(count = entering.len(), scroll_y = viewport.scroll_y, "Elements revealed");
    }
    entering.len()
}
