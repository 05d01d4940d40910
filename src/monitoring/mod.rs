//! Monitoring Module
//!
//! Log setup for extensions:
//! - Subscriber configuration
//! - In-memory log capture

pub mod logging;

pub use logging::{init_logging, LogCapture, LogLevel, LoggingConfig};
