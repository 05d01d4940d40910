//! Templates Module
//!
//! One starter entity per kind, ready to copy into a new extension.

pub mod command;
pub mod node;
pub mod translator;

pub use command::TemplateCommand;
pub use node::TemplateNode;
pub use translator::TemplateTranslator;
