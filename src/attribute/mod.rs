//! Attribute Module
//!
//! Node attribute helpers used during node-type initialization:
//! - Attribute references, values and definitions
//! - Option bundles
//! - Dependency declaration

pub mod definition;
pub mod dependency;
pub mod options;

pub use definition::{AttributeDef, AttributeKind, AttributeRef, AttributeValue, NumericType, UnitType};
pub use dependency::{declare, declare_with_state};
pub use options::{add_attribute, add_attribute_with, AttributeFlag, AttributeOptions};
