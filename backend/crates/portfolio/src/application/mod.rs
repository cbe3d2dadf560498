//! Application Layer - Use Cases
//!
//! This layer wires domain rules onto a document.
//! Contains the initialization use case and the event reactions.

pub mod anchor;
pub mod behavior;
pub mod config;
pub mod elements;
pub mod init;
pub mod menu;
pub mod reveal;
pub mod scroll_effects;
