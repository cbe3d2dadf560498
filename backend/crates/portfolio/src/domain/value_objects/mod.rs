//! Domain Value Objects
//!
//! Immutable value types for the page domain.

pub mod geometry;
pub mod selector;

pub use geometry::{Rect, ScrollBehavior, Viewport};
pub use selector::{Selector, SelectorError};
