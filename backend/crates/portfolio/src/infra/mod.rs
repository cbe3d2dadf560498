//! Infrastructure Layer - Document implementations

pub mod layout;
pub mod memory;
