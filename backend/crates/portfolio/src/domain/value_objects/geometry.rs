//! Geometry Value Objects
//!
//! Vertical layout only: every behavior on the page depends on offsets
//! along the scroll axis, never on horizontal position.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Vertical extent of an element in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Length of the overlap with `other` (0 when disjoint)
    pub fn overlap(&self, other: &Rect) -> f64 {
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        (bottom - top).max(0.0)
    }

    /// Whether `y` lies in `[top, bottom)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Visible window onto the document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.scroll_y, self.height)
    }
}

/// How a programmatic scroll moves the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[display("smooth")]
    Smooth,
    #[display("instant")]
    Instant,
}
