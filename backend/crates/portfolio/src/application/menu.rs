//! Mobile Menu
//!
//! Opening marks the toggle and the overlay `active` and locks body
//! scrolling; closing undoes both.

use crate::application::config::PageClasses;
use crate::application::elements::PageElements;
use crate::domain::document::Document;
use crate::domain::entities::MenuState;

const OVERFLOW: &str = "overflow";

/// State implied by the overlay's current classes
pub fn current_state<D: Document + ?Sized>(
    doc: &D,
    elements: &PageElements,
    classes: &PageClasses,
) -> MenuState {
    if doc.has_class(elements.mobile_menu, &classes.active) {
        MenuState::Open
    } else {
        MenuState::Closed
    }
}

/// Write `state` to the document
pub fn apply<D: Document + ?Sized>(
    doc: &mut D,
    elements: &PageElements,
    classes: &PageClasses,
    state: MenuState,
) {
    match state {
        MenuState::Open => {
            doc.add_class(elements.nav_toggle, &classes.active);
            doc.add_class(elements.mobile_menu, &classes.active);
            doc.set_style(elements.body, OVERFLOW, "hidden");
        }
        MenuState::Closed => {
            doc.remove_class(elements.nav_toggle, &classes.active);
            doc.remove_class(elements.mobile_menu, &classes.active);
            doc.set_style(elements.body, OVERFLOW, "");
        }
    }
}
