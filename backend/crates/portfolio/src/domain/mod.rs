//! Domain Layer - Page model and presentation rules
//!
//! This layer contains:
//! - Domain entities (MenuState, NavShadow, ScrollFrame)
//! - Domain value objects (Rect, Viewport, Selector)
//! - Domain services (pure presentation-state computations)
//! - Document trait (interface to a DOM-like page)

pub mod document;
pub mod entities;
pub mod services;
pub mod value_objects;
