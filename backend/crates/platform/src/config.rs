//! Throttle Configuration
//!
//! Window settings shared by every throttled handler.

use std::time::Duration;

use crate::throttle::ThrottleError;

/// Throttle configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    /// Cooldown window started by each forwarded call
    pub window: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_millis(100),
        }
    }
}

impl ThrottleConfig {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window: Duration::from_millis(window_ms),
        }
    }

    /// Build from a signed millisecond value, as read from env or JSON.
    ///
    /// Zero and negative windows are rejected.
    pub fn from_millis(window_ms: i64) -> Result<Self, ThrottleError> {
        if window_ms <= 0 {
            return Err(ThrottleError::NonPositiveWindow(window_ms));
        }
        Ok(Self::new(window_ms as u64))
    }

    /// Window in whole milliseconds, saturating at `i64::MAX`
    pub fn window_ms(&self) -> i64 {
        i64::try_from(self.window.as_millis()).unwrap_or(i64::MAX)
    }
}
