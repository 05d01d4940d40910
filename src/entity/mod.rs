//! Entity Module
//!
//! The three pluggable entity kinds and their shared contract:
//! - Commands
//! - Dependency-graph nodes
//! - File translators

pub mod command;
pub mod node;
pub mod translator;

pub use command::{execute, ArgList, Command, CommandInfo};
pub use node::{Node, NodeInfo, NodeType};
pub use translator::{
    read_file, write_file, FileAccessMode, FileFormat, FileObject, Translator, TranslatorInfo,
};

use crate::core::{EntityKind, Identity};
use crate::host::Creator;

/// Kind-specific flags reported to the host at registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Capabilities {
    Command { undoable: bool },
    Node { node_type: NodeType },
    Translator(FileFormat),
}

impl Capabilities {
    /// Kind the flags belong to.
    pub fn kind(&self) -> EntityKind {
        match self {
            Capabilities::Command { .. } => EntityKind::Command,
            Capabilities::Node { .. } => EntityKind::Node,
            Capabilities::Translator(_) => EntityKind::Translator,
        }
    }
}

/// Capability set shared by every entity kind.
pub trait Entity {
    /// Registered identity.
    fn identity(&self) -> &Identity;

    /// Kind-specific flags.
    fn capabilities(&self) -> Capabilities;

    /// Custom classification string.
    fn classification(&self) -> Option<&str> {
        None
    }

    /// Entity kind.
    fn kind(&self) -> EntityKind {
        self.capabilities().kind()
    }

    /// Name used in log lines.
    fn display_name(&self) -> &str {
        &self.identity().name
    }
}

/// Implemented by `dyn Command`, `dyn Node` and `dyn Translator`; ties an
/// entity kind to the creator variant the host expects for it.
pub trait EntityClass: Entity {
    /// Wrap an instance factory into a host creator.
    fn bind(create: fn() -> Box<Self>) -> Creator;
}
