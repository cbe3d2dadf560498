//! Domain Services
//!
//! Pure presentation logic: each function maps (scroll position, element
//! geometry) to the state the page should show. Nothing here touches a
//! document.

use std::time::Duration;

use crate::domain::entities::{MenuState, NavShadow, ScrollFrame, SectionGeometry};
use crate::domain::value_objects::{Rect, Viewport};

/// Key that dismisses the mobile menu
pub const ESCAPE_KEY: &str = "Escape";

/// Shadow is raised strictly past `threshold`
pub fn nav_shadow(scroll_y: f64, threshold: f64) -> NavShadow {
    if scroll_y > threshold {
        NavShadow::Raised
    } else {
        NavShadow::Flat
    }
}

/// Scroll range in which a section counts as current.
///
/// The band starts `nav_height + offset` above the section so a section
/// lights up shortly before it reaches the fixed nav bar.
pub fn section_band(section: Rect, nav_height: f64, offset: f64) -> Rect {
    Rect::new(section.top - nav_height - offset, section.height)
}

/// Id of the last section (in document order) whose band holds `scroll_y`
pub fn active_section<'a>(
    scroll_y: f64,
    nav_height: f64,
    offset: f64,
    sections: &[SectionGeometry<'a>],
) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|section| section_band(section.rect, nav_height, offset).contains(scroll_y))
        .map(|section| section.id)
}

pub fn scroll_frame(
    scroll_y: f64,
    nav_height: f64,
    shadow_threshold: f64,
    section_offset: f64,
    sections: &[SectionGeometry<'_>],
) -> ScrollFrame {
    ScrollFrame {
        shadow: nav_shadow(scroll_y, shadow_threshold),
        active_section: active_section(scroll_y, nav_height, section_offset, sections)
            .map(str::to_string),
    }
}

/// Scroll offset that puts `target` just below the fixed nav bar
pub fn anchor_scroll_top(target: Rect, nav_height: f64) -> f64 {
    target.top - nav_height
}

/// Viewport with its bottom edge pulled in by `bottom_margin`
pub fn intersection_root(viewport: Viewport, bottom_margin: f64) -> Rect {
    Rect::new(viewport.scroll_y, (viewport.height - bottom_margin).max(0.0))
}

/// Fraction of `element` inside `root`, in `[0, 1]`.
///
/// A zero-height element counts as fully inside when it lies on or
/// between the root's edges.
pub fn intersection_ratio(element: Rect, root: Rect) -> f64 {
    if element.height <= 0.0 {
        let inside = element.top >= root.top && element.top <= root.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    (element.overlap(&root) / element.height).min(1.0)
}

/// Whether `element` has scrolled far enough into view to be revealed
pub fn is_revealed(element: Rect, viewport: Viewport, bottom_margin: f64, threshold: f64) -> bool {
    let ratio = intersection_ratio(element, intersection_root(viewport, bottom_margin));
    ratio > 0.0 && ratio >= threshold
}

/// Transition delay of the `index`-th item in a staggered group
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// CSS time value in seconds, e.g. `0.15s`
pub fn css_seconds(delay: Duration) -> String {
    // Microsecond precision
    let seconds = (delay.as_secs_f64() * 1e6).round() / 1e6;
    format!("{seconds}s")
}

/// Whether `key` should close a menu currently in `state`
pub fn escape_closes(state: MenuState, key: &str) -> bool {
    key == ESCAPE_KEY && state.is_open()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionGeometry<'static>> {
        vec![
            SectionGeometry { id: "hero", rect: Rect::new(0.0, 700.0) },
            SectionGeometry { id: "about", rect: Rect::new(700.0, 800.0) },
            SectionGeometry { id: "experience", rect: Rect::new(1500.0, 900.0) },
        ]
    }

    #[test]
    fn test_nav_shadow_threshold_is_exclusive() {
        assert_eq!(nav_shadow(0.0, 50.0), NavShadow::Flat);
        assert_eq!(nav_shadow(50.0, 50.0), NavShadow::Flat);
        assert_eq!(nav_shadow(50.5, 50.0), NavShadow::Raised);
    }

    #[test]
    fn test_active_section_bands() {
        let sections = sections();
        // Bands with a 70px nav and 100px offset: hero [-170, 530),
        // about [530, 1330), experience [1330, 2230).
        assert_eq!(active_section(0.0, 70.0, 100.0, &sections), Some("hero"));
        assert_eq!(active_section(529.0, 70.0, 100.0, &sections), Some("hero"));
        assert_eq!(active_section(530.0, 70.0, 100.0, &sections), Some("about"));
        assert_eq!(active_section(1330.0, 70.0, 100.0, &sections), Some("experience"));
        assert_eq!(active_section(2230.0, 70.0, 100.0, &sections), None);
    }

    #[test]
    fn test_overlapping_bands_last_wins() {
        let sections = vec![
            SectionGeometry { id: "outer", rect: Rect::new(0.0, 2000.0) },
            SectionGeometry { id: "inner", rect: Rect::new(500.0, 300.0) },
        ];
        assert_eq!(active_section(600.0, 0.0, 0.0, &sections), Some("inner"));
        assert_eq!(active_section(400.0, 0.0, 0.0, &sections), Some("outer"));
        assert_eq!(active_section(900.0, 0.0, 0.0, &sections), Some("outer"));
    }

    #[test]
    fn test_scroll_frame() {
        let frame = scroll_frame(600.0, 70.0, 50.0, 100.0, &sections());
        assert_eq!(frame.shadow, NavShadow::Raised);
        assert_eq!(frame.active_section.as_deref(), Some("about"));
    }

    #[test]
    fn test_anchor_scroll_top() {
        assert_eq!(anchor_scroll_top(Rect::new(700.0, 800.0), 70.0), 630.0);
    }

    #[test]
    fn test_intersection_ratio() {
        let root = intersection_root(Viewport::new(0.0, 800.0), 50.0);
        assert_eq!(root, Rect::new(0.0, 750.0));

        assert_eq!(intersection_ratio(Rect::new(720.0, 80.0), root), 30.0 / 80.0);
        assert_eq!(intersection_ratio(Rect::new(100.0, 100.0), root), 1.0);
        assert_eq!(intersection_ratio(Rect::new(750.0, 100.0), root), 0.0);
        assert_eq!(intersection_ratio(Rect::new(750.0, 0.0), root), 1.0);
        assert_eq!(intersection_ratio(Rect::new(751.0, 0.0), root), 0.0);
    }

    #[test]
    fn test_is_revealed_threshold() {
        let viewport = Viewport::new(0.0, 800.0);
        // 5px of 100px visible: below the 10% threshold.
        assert!(!is_revealed(Rect::new(745.0, 100.0), viewport, 50.0, 0.1));
        // 10px of 100px visible: exactly at the threshold.
        assert!(is_revealed(Rect::new(740.0, 100.0), viewport, 50.0, 0.1));
        // Adjacent but not overlapping never reveals, even at threshold 0.
        assert!(!is_revealed(Rect::new(750.0, 100.0), viewport, 50.0, 0.0));
    }

    #[test]
    fn test_root_never_negative() {
        let root = intersection_root(Viewport::new(100.0, 30.0), 50.0);
        assert_eq!(root.height, 0.0);
    }

    #[test]
    fn test_stagger_delays() {
        let step = Duration::from_millis(150);
        let delays: Vec<String> = (0..4).map(|i| css_seconds(stagger_delay(i, step))).collect();
        assert_eq!(delays, vec!["0s", "0.15s", "0.3s", "0.45s"]);

        let step = Duration::from_millis(100);
        assert_eq!(css_seconds(stagger_delay(3, step)), "0.3s");

        let step = Duration::from_micros(1500);
        assert_eq!(css_seconds(stagger_delay(1, step)), "0.0015s");
        assert_eq!(css_seconds(stagger_delay(3, step)), "0.0045s");
    }

    #[test]
    fn test_escape_closes_only_open_menu() {
        assert!(escape_closes(MenuState::Open, "Escape"));
        assert!(!escape_closes(MenuState::Closed, "Escape"));
        assert!(!escape_closes(MenuState::Open, "Enter"));
    }
}
