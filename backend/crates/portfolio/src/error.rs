//! Page Error Types
//!
//! Page-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::ThrottleError;
use thiserror::Error;

use crate::domain::value_objects::SelectorError;

/// Page-specific result type alias
pub type PageResult<T> = Result<T, PageError>;

#[derive(Debug, Error)]
pub enum PageError {
    /// A configured selector does not parse
    #[error("Invalid selector '{selector}': {source}")]
    InvalidSelector {
        selector: String,
        #[source]
        source: SelectorError,
    },

    /// A required element is absent from the document
    #[error("Required element not found: {0}")]
    MissingElement(String),

    /// An event refers to a node the document does not have
    #[error("Event target not found: {0}")]
    TargetNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid page layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Throttle(#[from] ThrottleError),
}

impl PageError {
    pub fn invalid_selector(selector: impl Into<String>, source: SelectorError) -> Self {
        PageError::InvalidSelector {
            selector: selector.into(),
            source,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PageError::InvalidSelector { .. }
            | PageError::InvalidConfig(_)
            | PageError::Throttle(_) => ErrorKind::InvalidConfig,
            PageError::MissingElement(_) | PageError::TargetNotFound(_) => ErrorKind::NotFound,
            PageError::InvalidLayout(_) | PageError::InvalidEvent(_) => ErrorKind::InvalidInput,
            PageError::Io(_) => ErrorKind::Io,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            PageError::Io(e) => {
                tracing::error!(error = %e, "Page I/O error");
            }
            PageError::MissingElement(selector) => {
                tracing::error!(%selector, "Page is missing a required element");
            }
            PageError::TargetNotFound(target) => {
                tracing::warn!(%target, "Event target not found");
            }
            PageError::InvalidEvent(e) => {
                tracing::warn!(error = %e, "Malformed page event");
            }
            _ => {
                tracing::debug!(error = %self, "Page error");
            }
        }
    }
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}
