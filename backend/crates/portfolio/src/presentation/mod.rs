//! Presentation Layer - Event replay
//!
//! Event wire format, event sources, the dispatcher and the state snapshot.

pub mod dispatcher;
pub mod dto;
pub mod events;
pub mod source;
