//! Event Dispatcher
//!
//! Delivers [`PageEvent`]s to a [`PageBehavior`] the way a browser would.

use crate::application::behavior::PageBehavior;
use crate::domain::document::Document;
use crate::domain::value_objects::Selector;
use crate::error::{PageError, PageResult};
use crate::presentation::events::PageEvent;

/// Dispatch one event.
///
/// A click target is the first element matching the event's selector. A
/// click that scrolls the page (anchor navigation) is followed by a scroll
/// event, as the browser would fire one.
pub fn dispatch<D: Document>(behavior: &PageBehavior<D>, event: &PageEvent) -> PageResult<()> {
    tracing::debug!(event = event.name(), "Dispatching page event");
    match event {
        PageEvent::Scroll { y } => {
            behavior.document_mut().set_scroll_y(*y);
            behavior.on_scroll();
        }
        PageEvent::Click { target } => {
            let selector =
                Selector::parse(target).map_err(|e| PageError::invalid_selector(target, e))?;
            let node = behavior
                .document()
                .query_selector(&selector)
                .ok_or_else(|| PageError::TargetNotFound(target.clone()))?;
            let outcome = behavior.on_click(node);
            if outcome.scrolled_to.is_some() {
                behavior.on_scroll();
            }
        }
        PageEvent::KeyDown { key } => {
            behavior.on_keydown(key);
        }
        PageEvent::Load => behavior.on_load(),
    }
    Ok(())
}
