//! Page Initialization
//!
//! Wires the behavior onto a loaded document.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use platform::{Handler, Scheduler, Throttle};

use crate::application::behavior::PageBehavior;
use crate::application::config::BehaviorConfig;
use crate::application::elements::PageElements;
use crate::application::{menu, reveal, scroll_effects};
use crate::domain::document::Document;
use crate::error::PageResult;

/// Attach the page behavior to `document`.
///
/// Fails when the configuration is invalid or a required element (nav,
/// nav toggle, mobile menu) is missing. `scheduler` times the scroll
/// throttle and is unused when `config.scroll_throttle` is `None`.
pub fn initialize<D, S>(
    document: D,
    config: BehaviorConfig,
    scheduler: S,
) -> PageResult<PageBehavior<D>>
where
    D: Document + 'static,
    S: Scheduler + 'static,
{
    config.validate()?;
    let selectors = config.selectors.compile()?;
    let elements = PageElements::resolve(&document, &selectors)?;

    let document = Rc::new(RefCell::new(document));
    let config = Rc::new(config);
    let elements = Rc::new(elements);

    let initial_menu = {
        let mut doc = document.borrow_mut();
        reveal::prepare(&mut *doc, &elements, &config);
        let state = menu::current_state(&*doc, &elements, &config.classes);
        reveal::observe(&mut *doc, &elements, &config);
        state
    };

    let effects = {
        let document = Rc::clone(&document);
        let config = Rc::clone(&config);
        let elements = Rc::clone(&elements);
        move |scroll_y: f64| {
            let mut doc = document.borrow_mut();
            scroll_effects::apply(&mut *doc, &elements, &config, scroll_y);
        }
    };
    let scroll_effects: Box<dyn Handler<f64>> = match &config.scroll_throttle {
        Some(throttle) => Box::new(Throttle::from_config(effects, throttle, scheduler)?),
        None => Box::new(effects),
    };

    tracing::info!(
        sections = elements.sections.len(),
        reveal_targets = elements.reveal_targets.len(),
        menu = %initial_menu,
        throttle_ms = ?config.scroll_throttle.map(|t| t.window_ms()),
        "Page behavior initialized"
    );

    Ok(PageBehavior {
        document,
        config,
        elements,
        menu: Cell::new(initial_menu),
        scroll_effects,
    })
}
