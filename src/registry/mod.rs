//! Registry Module
//!
//! Ownership and host bookkeeping for registered entities.

pub mod entities;

pub use entities::{EntityRegistry, RegisteredEntity};
