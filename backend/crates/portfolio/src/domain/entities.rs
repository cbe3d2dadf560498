//! Domain Entities
//!
//! Presentation states computed by the domain services and applied to the
//! document by the application layer.

use derive_more::Display;
use serde::Serialize;

/// Mobile navigation overlay state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    #[display("closed")]
    Closed,
    #[display("open")]
    Open,
}

impl MenuState {
    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// State after a click on the nav toggle
    #[inline]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// Navigation bar elevation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavShadow {
    /// Page scrolled past the threshold; the bar casts a shadow
    #[display("raised")]
    Raised,
    #[display("flat")]
    Flat,
}

/// A section's id and geometry, input to active-section detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry<'a> {
    pub id: &'a str,
    pub rect: crate::domain::value_objects::Rect,
}

/// Scroll-driven navigation state for one scroll position
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub shadow: NavShadow,
    /// Id of the section whose band holds the scroll position, if any
    pub active_section: Option<String>,
}
