//! Host Module
//!
//! The boundary between the framework and the host application:
//! - Host and attribute-host calls
//! - Registration records and creators
//! - Per-evaluation data blocks
//! - An in-memory host

pub mod data;
pub mod interface;
pub mod memory;

pub use data::DataBlock;
pub use interface::{AttributeHost, Creator, ExtensionInfo, Host, Initializer, Registration};
pub use memory::{HostCall, MemoryHost};
