//! # plugin-base - Entity registration for host-application extensions
//!
//! An extension declares its pluggable entities once and this crate handles
//! the host boilerplate:
//! - **Registry**: owned entities per kind, kept in lock-step with the host
//! - **Status**: diagnostics in, host status codes out at every boundary
//! - **Dispatch**: exception-safe node recompute
//! - **Attribute**: bulk dependency declaration and attribute helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plugin_base::entity::{Command, Node, Translator};
//! use plugin_base::host::MemoryHost;
//! use plugin_base::session::{Extension, Registrar, Session, SessionConfig};
//! use plugin_base::status::DiagResult;
//! use plugin_base::templates::{TemplateCommand, TemplateNode, TemplateTranslator};
//!
//! struct MyExtension;
//!
//! impl Extension for MyExtension {
//!     fn register_commands(&self, commands: &mut Registrar<'_, dyn Command>) -> DiagResult<()> {
//!         commands.add(TemplateCommand::create)
//!     }
//!
//!     fn register_nodes(&self, nodes: &mut Registrar<'_, dyn Node>) -> DiagResult<()> {
//!         nodes.add_node(TemplateNode::create, TemplateNode::initialize)
//!     }
//!
//!     fn register_translators(&self, translators: &mut Registrar<'_, dyn Translator>) -> DiagResult<()> {
//!         translators.add(TemplateTranslator::create)
//!     }
//! }
//!
//! let mut session = Session::new(MemoryHost::new(), SessionConfig::new("myExtension", "1.0"));
//! assert!(session.on_load(&MyExtension).is_success());
//! assert!(session.on_unload().is_success());
//! ```

pub mod attribute;
pub mod core;
pub mod dispatch;
pub mod entity;
pub mod host;
pub mod monitoring;
pub mod registry;
pub mod session;
pub mod status;
pub mod templates;

pub use core::error::{Error, Result};
pub use registry::EntityRegistry;
pub use session::{Extension, Session, SessionConfig};
pub use status::{boundary, throw_if, Diagnostic, StatusCode};
