//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Deferred task scheduling (tokio `LocalSet` and a virtual clock)
//! - Leading-edge call throttling
//! - Throttle configuration

pub mod config;
pub mod scheduler;
pub mod throttle;
pub mod virtual_clock;

pub use config::ThrottleConfig;
pub use scheduler::{Scheduler, Task, TokioScheduler};
pub use throttle::{Admission, Handler, Throttle, ThrottleError, throttle};
pub use virtual_clock::ManualScheduler;
