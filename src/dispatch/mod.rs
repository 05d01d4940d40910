//! Dispatch Module
//!
//! Host-facing wrappers around entity hooks:
//! - Node recompute

pub mod compute;

pub use compute::compute;
