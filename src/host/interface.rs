//! Host boundary definition.
//!
//! The calls the framework makes into the host application, and the record
//! handed over when an entity is registered.

use crate::attribute::{AttributeDef, AttributeFlag, AttributeRef};
use crate::core::{EntityKind, Identity};
use crate::entity::{Capabilities, Command, Node, Translator};
use crate::status::StatusCode;

/// Attribute-level calls available while a node type initializes.
pub trait AttributeHost {
    /// Add an attribute to the node type being initialized.
    fn add_attribute(&mut self, def: &AttributeDef) -> StatusCode;

    /// Set one option flag on an attribute.
    fn set_attribute_flag(&mut self, attr: &AttributeRef, flag: AttributeFlag, value: bool)
        -> StatusCode;

    /// Declare that a change to `trigger` dirties `affected`.
    fn declare_dependency(&mut self, trigger: &AttributeRef, affected: &AttributeRef) -> StatusCode;
}

/// Extension identity announced to the host before anything is registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionInfo {
    /// Project name
    pub name: String,
    /// Extension version
    pub version: String,
    /// Vendor
    pub vendor: String,
    /// Host API version the extension was built against
    pub api_version: String,
}

/// Entity-level calls made at load and unload time.
pub trait Host {
    /// Announce the extension being loaded.
    fn register_extension(&mut self, info: &ExtensionInfo) -> StatusCode;

    /// Make an entity known to the host.
    fn register_entity(&mut self, registration: Registration) -> StatusCode;

    /// Remove a previously registered entity.
    fn deregister_entity(&mut self, kind: EntityKind, identity: &Identity) -> StatusCode;
}

/// Node-type initializer, called by the host once per registered node type.
pub type Initializer = fn(&mut dyn AttributeHost) -> StatusCode;

/// Instance creator handed to the host.
#[derive(Clone, Copy, Debug)]
pub enum Creator {
    Command(fn() -> Box<dyn Command>),
    Node(fn() -> Box<dyn Node>),
    Translator(fn() -> Box<dyn Translator>),
}

impl Creator {
    /// Kind of entity this creator produces.
    pub fn kind(&self) -> EntityKind {
        match self {
            Creator::Command(_) => EntityKind::Command,
            Creator::Node(_) => EntityKind::Node,
            Creator::Translator(_) => EntityKind::Translator,
        }
    }
}

/// Everything the host needs to create and initialize instances of an entity.
#[derive(Clone)]
pub struct Registration {
    /// Registered identity
    pub identity: Identity,
    /// Instance creator
    pub creator: Creator,
    /// Node-type initializer
    pub initializer: Option<Initializer>,
    /// Kind-specific flags
    pub capabilities: Capabilities,
    /// Custom classification string
    pub classification: Option<String>,
}

impl Registration {
    /// Entity kind.
    pub fn kind(&self) -> EntityKind {
        self.creator.kind()
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("kind", &self.kind())
            .field("identity", &self.identity)
            .field("initializer", &self.initializer.is_some())
            .field("capabilities", &self.capabilities)
            .field("classification", &self.classification)
            .finish()
    }
}
