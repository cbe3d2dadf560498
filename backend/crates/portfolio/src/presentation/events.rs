//! Page Events
//!
//! Wire format of the events replayed onto a page, one JSON object each:
//!
//! ```json
//! { "at_ms": 0,   "type": "load" }
//! { "at_ms": 120, "type": "scroll", "y": 600 }
//! { "at_ms": 400, "type": "click", "target": ".nav-links a[href='#about']" }
//! { "at_ms": 900, "type": "keydown", "key": "Escape" }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// The viewport moved to `y`
    Scroll { y: f64 },
    /// Click on the first element matching the `target` selector
    Click { target: String },
    #[serde(rename = "keydown")]
    KeyDown { key: String },
    /// Window `load`
    Load,
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PageEvent::Scroll { .. } => "scroll",
            PageEvent::Click { .. } => "click",
            PageEvent::KeyDown { .. } => "keydown",
            PageEvent::Load => "load",
        }
    }
}

/// An event with its offset from the start of the replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    #[serde(default)]
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: PageEvent,
}

impl TimedEvent {
    pub fn new(at_ms: u64, event: PageEvent) -> Self {
        Self { at_ms, event }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserialization() {
        let event = TimedEvent::from_json(r#"{"at_ms": 120, "type": "scroll", "y": 600}"#).unwrap();
        assert_eq!(event, TimedEvent::new(120, PageEvent::Scroll { y: 600.0 }));

        let event = TimedEvent::from_json(r#"{"type": "keydown", "key": "Escape"}"#).unwrap();
        assert_eq!(event.at_ms, 0);
        assert_eq!(
            event.event,
            PageEvent::KeyDown {
                key: "Escape".to_string()
            }
        );

        let event = TimedEvent::from_json(r#"{"type": "load"}"#).unwrap();
        assert_eq!(event.event.name(), "load");
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        assert!(TimedEvent::from_json(r#"{"type": "resize"}"#).is_err());
        assert!(TimedEvent::from_json(r#"{"type": "click"}"#).is_err());
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_value(TimedEvent::new(
            5,
            PageEvent::Click {
                target: ".nav-toggle".to_string(),
            },
        ))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "at_ms": 5, "type": "click", "target": ".nav-toggle" })
        );
    }
}
