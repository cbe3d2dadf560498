//! Replay settings, read from the environment (and `.env`).

use std::env;
use std::path::PathBuf;

use kernel::error::app_error::{AppError, AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use platform::ThrottleConfig;

const DEFAULT_LAYOUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/portfolio.json");

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// `PAGE_LAYOUT`: page layout JSON
    pub layout: PathBuf,
    /// `EVENT_SCRIPT`: JSON array of events; stdin JSON lines when unset
    pub script: Option<PathBuf>,
    /// `SCROLL_THROTTLE_MS`: throttle window for scroll effects
    pub scroll_throttle: Option<ThrottleConfig>,
}

impl Settings {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let scroll_throttle = match non_empty("SCROLL_THROTTLE_MS") {
            Some(raw) => {
                let window_ms: i64 = raw
                    .trim()
                    .parse()
                    .map_app_err(ErrorKind::InvalidConfig, "SCROLL_THROTTLE_MS is not an integer")?;
                let config = ThrottleConfig::from_millis(window_ms).map_err(|e| {
                    AppError::invalid_config(e.to_string())
                        .with_action("Set SCROLL_THROTTLE_MS to a positive number of milliseconds")
                        .with_source(e)
                })?;
                Some(config)
            }
            None => None,
        };

        Ok(Self {
            layout: non_empty("PAGE_LAYOUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LAYOUT)),
            script: non_empty("EVENT_SCRIPT").map(PathBuf::from),
            scroll_throttle,
        })
    }
}
