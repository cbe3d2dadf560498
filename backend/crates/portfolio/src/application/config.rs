//! Application Configuration
//!
//! Selectors, class names and tuning constants for the page behavior.

use std::time::Duration;

use platform::{ThrottleConfig, ThrottleError};

use crate::domain::entities::NavShadow;
use crate::domain::value_objects::{ScrollBehavior, Selector};
use crate::error::{PageError, PageResult};

/// Selectors locating the elements the behavior is wired to
#[derive(Debug, Clone)]
pub struct PageSelectors {
    /// In-page links handled by smooth scrolling
    pub anchor_links: String,
    pub nav: String,
    pub nav_toggle: String,
    pub mobile_menu: String,
    /// Links inside the mobile menu; a click closes the menu
    pub mobile_menu_links: String,
    /// Desktop nav links receiving the active highlight
    pub nav_links: String,
    pub sections: String,
    /// Elements faded in as they scroll into view
    pub reveal_targets: String,
    pub timeline_items: String,
    pub skill_categories: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            anchor_links: r##"a[href^="#"]"##.to_string(),
            nav: ".nav".to_string(),
            nav_toggle: ".nav-toggle".to_string(),
            mobile_menu: ".mobile-menu".to_string(),
            mobile_menu_links: ".mobile-menu-links a".to_string(),
            nav_links: ".nav-links a".to_string(),
            sections: "section[id]".to_string(),
            reveal_targets: [
                ".section-header",
                ".about-image",
                ".about-text",
                ".timeline-item",
                ".skill-category",
                ".certifications",
                ".contact-intro",
                ".contact-links",
            ]
            .join(", "),
            timeline_items: ".timeline-item".to_string(),
            skill_categories: ".skill-category".to_string(),
        }
    }
}

/// Parsed form of [`PageSelectors`]
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub anchor_links: Selector,
    pub nav: Selector,
    pub nav_toggle: Selector,
    pub mobile_menu: Selector,
    pub mobile_menu_links: Selector,
    pub nav_links: Selector,
    pub sections: Selector,
    pub reveal_targets: Selector,
    pub timeline_items: Selector,
    pub skill_categories: Selector,
}

impl PageSelectors {
    pub fn compile(&self) -> PageResult<CompiledSelectors> {
        fn parse(source: &str) -> PageResult<Selector> {
            Selector::parse(source).map_err(|e| PageError::invalid_selector(source, e))
        }

        Ok(CompiledSelectors {
            anchor_links: parse(&self.anchor_links)?,
            nav: parse(&self.nav)?,
            nav_toggle: parse(&self.nav_toggle)?,
            mobile_menu: parse(&self.mobile_menu)?,
            mobile_menu_links: parse(&self.mobile_menu_links)?,
            nav_links: parse(&self.nav_links)?,
            sections: parse(&self.sections)?,
            reveal_targets: parse(&self.reveal_targets)?,
            timeline_items: parse(&self.timeline_items)?,
            skill_categories: parse(&self.skill_categories)?,
        })
    }
}

/// Class names toggled by the behavior
#[derive(Debug, Clone)]
pub struct PageClasses {
    /// Open menu, open toggle, highlighted nav link
    pub active: String,
    /// Marks an element as a reveal target
    pub reveal: String,
    /// Added once a reveal target has scrolled into view
    pub visible: String,
    /// Added to `<body>` on window load
    pub loaded: String,
}

impl Default for PageClasses {
    fn default() -> Self {
        Self {
            active: "active".to_string(),
            reveal: "reveal".to_string(),
            visible: "visible".to_string(),
            loaded: "loaded".to_string(),
        }
    }
}

impl PageClasses {
    fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.active, &self.reveal, &self.visible, &self.loaded]
            .into_iter()
            .map(String::as_str)
    }
}

/// Page behavior configuration
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    pub selectors: PageSelectors,
    pub classes: PageClasses,
    /// Scroll offset past which the nav casts a shadow
    pub shadow_threshold: f64,
    /// `box-shadow` value of the raised nav
    pub raised_shadow: String,
    /// Extra lead, on top of the nav height, for section highlighting
    pub section_offset: f64,
    /// Visible fraction at which a target is revealed
    pub reveal_threshold: f64,
    /// Pixels trimmed off the bottom of the viewport for reveal checks
    pub reveal_bottom_margin: f64,
    pub timeline_stagger: Duration,
    pub skill_stagger: Duration,
    /// How anchor navigation moves the viewport
    pub anchor_scroll: ScrollBehavior,
    /// Throttle for nav shadow and highlighting; `None` runs them on every scroll
    pub scroll_throttle: Option<ThrottleConfig>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            selectors: PageSelectors::default(),
            classes: PageClasses::default(),
            shadow_threshold: 50.0,
            raised_shadow: "0 1px 20px rgba(0, 0, 0, 0.08)".to_string(),
            section_offset: 100.0,
            reveal_threshold: 0.1,
            reveal_bottom_margin: 50.0,
            timeline_stagger: Duration::from_millis(150),
            skill_stagger: Duration::from_millis(100),
            anchor_scroll: ScrollBehavior::Smooth,
            scroll_throttle: None,
        }
    }
}

impl BehaviorConfig {
    pub fn with_scroll_throttle(mut self, throttle: ThrottleConfig) -> Self {
        self.scroll_throttle = Some(throttle);
        self
    }

    /// `box-shadow` value for `shadow`
    pub fn shadow_css(&self, shadow: NavShadow) -> &str {
        match shadow {
            NavShadow::Raised => self.raised_shadow.as_str(),
            NavShadow::Flat => "none",
        }
    }

    pub fn validate(&self) -> PageResult<()> {
        for (name, value) in [
            ("shadow_threshold", self.shadow_threshold),
            ("section_offset", self.section_offset),
            ("reveal_bottom_margin", self.reveal_bottom_margin),
        ] {
            if !value.is_finite() {
                return Err(PageError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(PageError::InvalidConfig(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.reveal_bottom_margin < 0.0 {
            return Err(PageError::InvalidConfig(format!(
                "reveal_bottom_margin must not be negative, got {}",
                self.reveal_bottom_margin
            )));
        }
        if let Some(class) = self
            .classes
            .iter()
            .find(|c| c.is_empty() || c.contains(char::is_whitespace))
        {
            return Err(PageError::InvalidConfig(format!(
                "class name '{class}' must be a single non-empty token"
            )));
        }
        if let Some(throttle) = &self.scroll_throttle
            && throttle.window.is_zero()
        {
            return Err(ThrottleError::NonPositiveWindow(0).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BehaviorConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.selectors.compile().is_ok());
        assert!(config.scroll_throttle.is_none());
        assert_eq!(config.shadow_css(NavShadow::Flat), "none");
        assert_eq!(
            config.shadow_css(NavShadow::Raised),
            "0 1px 20px rgba(0, 0, 0, 0.08)"
        );
    }

    #[test]
    fn test_reveal_threshold_range() {
        let config = BehaviorConfig {
            reveal_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PageError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_throttle_window_rejected() {
        let config = BehaviorConfig::default().with_scroll_throttle(ThrottleConfig::new(0));
        assert!(matches!(config.validate(), Err(PageError::Throttle(_))));

        let config = BehaviorConfig::default().with_scroll_throttle(ThrottleConfig::new(16));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sub_millisecond_and_huge_throttle_windows_accepted() {
        for window in [Duration::from_micros(500), Duration::MAX] {
            let config =
                BehaviorConfig::default().with_scroll_throttle(ThrottleConfig { window });
            assert!(config.validate().is_ok(), "window {window:?}");
        }
    }

    #[test]
    fn test_bad_class_name_rejected() {
        let mut config = BehaviorConfig::default();
        config.classes.visible = "is visible".to_string();
        assert!(matches!(config.validate(), Err(PageError::InvalidConfig(_))));
    }

    #[test]
    fn test_bad_selector_reported_with_source() {
        let mut selectors = PageSelectors::default();
        selectors.nav = "nav >".to_string();
        match selectors.compile() {
            Err(PageError::InvalidSelector { selector, .. }) => assert_eq!(selector, "nav >"),
            other => panic!("expected InvalidSelector, got {other:?}"),
        }
    }
}
