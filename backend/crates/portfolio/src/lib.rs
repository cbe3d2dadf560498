//! Portfolio Page Behavior Module
//!
//! Clean Architecture structure:
//! - `domain/` - Page model, selector engine, presentation rules, Document trait
//! - `application/` - Initialization and event reactions
//! - `infra/` - In-memory document and layout files
//! - `presentation/` - Event wire format, event sources, dispatch, snapshots
//!
//! ## Behavior
//! - In-page links scroll smoothly to their target, offset by the nav height
//! - The mobile menu toggles, locks body scrolling while open, and closes on
//!   link click or Escape
//! - Scrolling raises the nav shadow, highlights the current section's nav
//!   link and reveals elements entering the viewport
//! - Scroll effects can be rate-limited with a leading-edge throttle

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::behavior::{ClickOutcome, PageBehavior};
pub use application::config::{BehaviorConfig, PageClasses, PageSelectors};
pub use application::init::initialize;
pub use domain::document::Document;
pub use error::{PageError, PageResult};
pub use infra::layout::PageLayout;
pub use infra::memory::{ElementSpec, MemoryDocument};
pub use presentation::dispatcher::dispatch;
pub use presentation::dto::PageSnapshot;
pub use presentation::events::{PageEvent, TimedEvent};
pub use presentation::source::{EventSource, LineEvents, LocalEventSource, ScriptedEvents};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, ResultExt},
    kind::ErrorKind,
};
