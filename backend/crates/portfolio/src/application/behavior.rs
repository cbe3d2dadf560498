//! Page Behavior
//!
//! The wired-up page: owns the document and reacts to scroll, click,
//! keydown and load events.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use kernel::id::NodeId;
use platform::Handler;

use crate::application::config::BehaviorConfig;
use crate::application::elements::PageElements;
use crate::application::{anchor, menu, reveal};
use crate::domain::document::Document;
use crate::domain::entities::MenuState;
use crate::domain::services::escape_closes;

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClickOutcome {
    /// An in-page link swallowed the browser's default navigation
    pub default_prevented: bool,
    /// Offset requested by anchor navigation, if any
    pub scrolled_to: Option<f64>,
}

pub struct PageBehavior<D> {
    pub(crate) document: Rc<RefCell<D>>,
    pub(crate) config: Rc<BehaviorConfig>,
    pub(crate) elements: Rc<PageElements>,
    pub(crate) menu: Cell<MenuState>,
    pub(crate) scroll_effects: Box<dyn Handler<f64>>,
}

impl<D: Document> PageBehavior<D> {
    pub fn document(&self) -> Ref<'_, D> {
        self.document.borrow()
    }

    pub fn document_mut(&self) -> RefMut<'_, D> {
        self.document.borrow_mut()
    }

    pub fn config(&self) -> &BehaviorConfig {
        &self.config
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.get()
    }

    /// React to the viewport having moved.
    ///
    /// Reveal runs on every scroll; nav shadow and highlighting go through
    /// the (possibly throttled) scroll-effects handler.
    pub fn on_scroll(&self) {
        let scroll_y = {
            let mut doc = self.document.borrow_mut();
            reveal::observe(&mut *doc, &self.elements, &self.config);
            doc.viewport().scroll_y
        };
        self.scroll_effects.handle(scroll_y);
    }

    /// Click on `target`, bubbling up through its ancestors
    pub fn on_click(&self, target: NodeId) -> ClickOutcome {
        let mut outcome = ClickOutcome::default();
        let path = self.document.borrow().ancestors_inclusive(target);

        for node in path {
            if self.elements.is_anchor_link(node) {
                outcome.default_prevented = true;
                let scrolled = {
                    let mut doc = self.document.borrow_mut();
                    anchor::scroll_to_anchor(&mut *doc, &self.elements, &self.config, node)
                };
                if let Some(top) = scrolled {
                    outcome.scrolled_to = Some(top);
                    self.close_menu();
                }
            }
            if node == self.elements.nav_toggle {
                self.toggle_menu();
            }
            if self.elements.is_mobile_menu_link(node) {
                self.close_menu();
            }
        }
        outcome
    }

    /// Returns whether the key closed the menu
    pub fn on_keydown(&self, key: &str) -> bool {
        if escape_closes(self.menu.get(), key) {
            self.close_menu();
            true
        } else {
            false
        }
    }

    pub fn on_load(&self) {
        let mut doc = self.document.borrow_mut();
        let body = doc.body();
        doc.add_class(body, &self.config.classes.loaded);
        tracing::debug!("Page loaded");
    }

    pub fn open_menu(&self) {
        self.set_menu(MenuState::Open);
    }

    pub fn close_menu(&self) {
        self.set_menu(MenuState::Closed);
    }

    pub fn toggle_menu(&self) {
        self.set_menu(self.menu.get().toggled());
    }

    fn set_menu(&self, state: MenuState) {
        let previous = self.menu.replace(state);
        let mut doc = self.document.borrow_mut();
        menu::apply(&mut *doc, &self.elements, &self.config.classes, state);
        if previous != state {
            tracing::debug!(from = %previous, to = %state, "Mobile menu state changed");
        }
    }
}

impl<D> fmt::Debug for PageBehavior<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageBehavior")
            .field("menu", &self.menu.get())
            .field("scroll_throttle", &self.config.scroll_throttle)
            .finish_non_exhaustive()
    }
}
