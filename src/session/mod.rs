//! Session Module
//!
//! Load/unload entry points for an extension:
//! - Session object owning the per-kind registries
//! - Extension registration trait
//! - Session configuration

pub mod config;
pub mod lifecycle;

pub use config::SessionConfig;
pub use lifecycle::{Extension, Registrar, Session, SessionState};
