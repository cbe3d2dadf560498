//! Scroll Effects
//!
//! Nav shadow and active-section highlighting for one scroll position.

use crate::application::config::BehaviorConfig;
use crate::application::elements::PageElements;
use crate::domain::document::Document;
use crate::domain::entities::{ScrollFrame, SectionGeometry};
use crate::domain::services::scroll_frame;

const BOX_SHADOW: &str = "box-shadow";

pub fn apply<D: Document + ?Sized>(
    doc: &mut D,
    elements: &PageElements,
    config: &BehaviorConfig,
    scroll_y: f64,
) -> ScrollFrame {
    let nav_height = doc.geometry(elements.nav).height;
    let sections: Vec<SectionGeometry<'_>> = elements
        .sections
        .iter()
        .map(|section| SectionGeometry {
            id: &section.id,
            rect: doc.geometry(section.node),
        })
        .collect();
    let frame = scroll_frame(
        scroll_y,
        nav_height,
        config.shadow_threshold,
        config.section_offset,
        &sections,
    );

    doc.set_style(elements.nav, BOX_SHADOW, config.shadow_css(frame.shadow));

    // Outside every band the previous highlight stays.
    if let Some(id) = &frame.active_section {
        let href = format!("#{id}");
        let active = &config.classes.active;
        for &link in &elements.nav_links {
            doc.remove_class(link, active);
        }
        let matching: Vec<_> = elements
            .nav_links
            .iter()
            .copied()
            .filter(|&link| doc.attribute(link, "href") == Some(href.as_str()))
            .collect();
        for link in matching {
            doc.add_class(link, active);
        }
    }

    tracing::trace!(scroll_y, shadow = %frame.shadow, active = ?frame.active_section, "Scroll effects applied");
    frame
}
