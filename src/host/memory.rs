//! In-memory host.
//!
//! Implements the host boundary without a real host application: every call
//! is recorded in order, failures can be injected per call, and registered
//! creators can be used to build and drive live instances.

use crate::attribute::{AttributeDef, AttributeFlag, AttributeRef, AttributeValue};
use crate::core::{EntityKind, Identity};
use crate::entity::{self, ArgList, Command, Node, Translator};
use crate::host::data::DataBlock;
use crate::host::interface::{AttributeHost, Creator, ExtensionInfo, Host, Registration};
use crate::status::StatusCode;
use std::collections::HashMap;

/// One call received by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    RegisterExtension(ExtensionInfo),
    Register { kind: EntityKind, name: String },
    Deregister { kind: EntityKind, name: String },
    AddAttribute { node: String, attr: AttributeRef },
    SetFlag { attr: AttributeRef, flag: AttributeFlag, value: bool },
    DeclareDependency { trigger: AttributeRef, affected: AttributeRef },
}

#[derive(Default)]
struct Failures {
    extension: Option<StatusCode>,
    register: HashMap<String, StatusCode>,
    deregister: HashMap<String, StatusCode>,
    attribute: HashMap<AttributeRef, StatusCode>,
    flag: HashMap<(AttributeRef, AttributeFlag), StatusCode>,
    dependency: HashMap<(AttributeRef, AttributeRef), StatusCode>,
}

/// Host double that keeps its entity table in memory.
///
/// Node initializers run inside `register_entity`, and a failing
/// initializer fails the registration. Attribute calls made outside an
/// initializer are filed under the empty node name. Re-declaring a
/// dependency pair is accepted and stored once.
#[derive(Default)]
pub struct MemoryHost {
    extension: Option<ExtensionInfo>,
    registered: Vec<Registration>,
    calls: Vec<HostCall>,
    attributes: HashMap<String, Vec<AttributeDef>>,
    dependencies: HashMap<String, Vec<(AttributeRef, AttributeRef)>>,
    initializing: Option<String>,
    failures: Failures,
}

impl MemoryHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the extension announcement.
    pub fn with_extension_failure(mut self, status: StatusCode) -> Self {
        self.failures.extension = Some(status);
        self
    }

    /// Reject registration of `name`.
    pub fn with_register_failure(mut self, name: &str, status: StatusCode) -> Self {
        self.failures.register.insert(name.to_string(), status);
        self
    }

    /// Reject deregistration of `name`.
    pub fn with_deregister_failure(mut self, name: &str, status: StatusCode) -> Self {
        self.failures.deregister.insert(name.to_string(), status);
        self
    }

    /// Reject adding `attr`.
    pub fn with_attribute_failure(mut self, attr: &AttributeRef, status: StatusCode) -> Self {
        self.failures.attribute.insert(attr.clone(), status);
        self
    }

    /// Reject setting `flag` on `attr`.
    pub fn with_flag_failure(
        mut self,
        attr: &AttributeRef,
        flag: AttributeFlag,
        status: StatusCode,
    ) -> Self {
        self.failures.flag.insert((attr.clone(), flag), status);
        self
    }

    /// Reject the `trigger -> affected` declaration.
    pub fn with_dependency_failure(
        mut self,
        trigger: &AttributeRef,
        affected: &AttributeRef,
        status: StatusCode,
    ) -> Self {
        self.failures
            .dependency
            .insert((trigger.clone(), affected.clone()), status);
        self
    }

    /// Stop rejecting deregistration of `name`.
    pub fn clear_deregister_failure(&mut self, name: &str) {
        self.failures.deregister.remove(name);
    }

    /// Extension announced by the last successful load.
    pub fn extension(&self) -> Option<&ExtensionInfo> {
        self.extension.as_ref()
    }

    /// Every call received, in order.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Currently registered entities, in registration order.
    pub fn registered(&self) -> &[Registration] {
        &self.registered
    }

    /// Names registered for one kind, in registration order.
    pub fn registered_names(&self, kind: EntityKind) -> Vec<&str> {
        self.registered
            .iter()
            .filter(|r| r.kind() == kind)
            .map(|r| r.identity.name.as_str())
            .collect()
    }

    /// Look up a registration.
    pub fn registration(&self, kind: EntityKind, name: &str) -> Option<&Registration> {
        self.registered
            .iter()
            .find(|r| r.kind() == kind && r.identity.name == name)
    }

    /// Whether an entity is registered.
    pub fn is_registered(&self, kind: EntityKind, name: &str) -> bool {
        self.registration(kind, name).is_some()
    }

    /// Attributes added for a node type.
    pub fn attributes(&self, node: &str) -> &[AttributeDef] {
        self.attributes.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dependency pairs declared for a node type.
    pub fn dependencies(&self, node: &str) -> &[(AttributeRef, AttributeRef)] {
        self.dependencies.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Attributes dirtied when `trigger` changes on `node`.
    pub fn affected_by(&self, node: &str, trigger: &AttributeRef) -> Vec<&AttributeRef> {
        self.dependencies(node)
            .iter()
            .filter(|(t, _)| t == trigger)
            .map(|(_, a)| a)
            .collect()
    }

    /// Create a command instance through its registered creator.
    pub fn create_command(&self, name: &str) -> Option<Box<dyn Command>> {
        match self.registration(EntityKind::Command, name)?.creator {
            Creator::Command(create) => Some(create()),
            _ => None,
        }
    }

    /// Create a node instance through its registered creator.
    pub fn create_node(&self, name: &str) -> Option<Box<dyn Node>> {
        match self.registration(EntityKind::Node, name)?.creator {
            Creator::Node(create) => Some(create()),
            _ => None,
        }
    }

    /// Create a translator instance through its registered creator.
    pub fn create_translator(&self, name: &str) -> Option<Box<dyn Translator>> {
        match self.registration(EntityKind::Translator, name)?.creator {
            Creator::Translator(create) => Some(create()),
            _ => None,
        }
    }

    /// Fresh data block holding every attribute default of `node`.
    pub fn data_block(&self, node: &str) -> DataBlock {
        let mut data = DataBlock::new();
        for def in self.attributes(node) {
            if let Some(value) = def.default_value() {
                data.set_value(def.attr.clone(), value);
            }
        }
        data
    }

    /// Write an input and dirty everything it affects.
    pub fn set_input(
        &self,
        node: &str,
        data: &mut DataBlock,
        attr: &AttributeRef,
        value: AttributeValue,
    ) {
        data.set_value(attr.clone(), value);
        for affected in self.affected_by(node, attr) {
            data.mark_dirty(affected);
        }
    }

    /// Create a command and run it once.
    pub fn invoke_command(&self, name: &str, args: &ArgList) -> StatusCode {
        match self.create_command(name) {
            Some(mut command) => entity::execute(command.as_mut(), args),
            None => StatusCode::NotFound,
        }
    }

    fn current_node(&self) -> String {
        self.initializing.clone().unwrap_or_default()
    }
}

impl Host for MemoryHost {
    fn register_extension(&mut self, info: &ExtensionInfo) -> StatusCode {
        self.calls.push(HostCall::RegisterExtension(info.clone()));
        if let Some(status) = self.failures.extension {
            return status;
        }
        self.extension = Some(info.clone());
        StatusCode::Success
    }

    fn register_entity(&mut self, registration: Registration) -> StatusCode {
        let kind = registration.kind();
        let name = registration.identity.name.clone();
        self.calls.push(HostCall::Register {
            kind,
            name: name.clone(),
        });

        if let Some(status) = self.failures.register.get(&name) {
            return *status;
        }
        if self.is_registered(kind, &name) {
            return StatusCode::Failure;
        }
        if kind == EntityKind::Node
            && self.registered.iter().any(|r| {
                r.kind() == EntityKind::Node
                    && r.identity.id.is_some()
                    && r.identity.id == registration.identity.id
            })
        {
            return StatusCode::Failure;
        }

        if let Some(initialize) = registration.initializer {
            self.initializing = Some(name.clone());
            let status = initialize(self);
            self.initializing = None;
            if status.is_error() {
                self.attributes.remove(&name);
                self.dependencies.remove(&name);
                return status;
            }
        }

        self.registered.push(registration);
        StatusCode::Success
    }

    fn deregister_entity(&mut self, kind: EntityKind, identity: &Identity) -> StatusCode {
        self.calls.push(HostCall::Deregister {
            kind,
            name: identity.name.clone(),
        });

        if let Some(status) = self.failures.deregister.get(&identity.name) {
            return *status;
        }
        let Some(index) = self
            .registered
            .iter()
            .position(|r| r.kind() == kind && r.identity == *identity)
        else {
            return StatusCode::NotFound;
        };

        self.registered.remove(index);
        if kind == EntityKind::Node {
            self.attributes.remove(&identity.name);
            self.dependencies.remove(&identity.name);
        }
        StatusCode::Success
    }
}

impl AttributeHost for MemoryHost {
    fn add_attribute(&mut self, def: &AttributeDef) -> StatusCode {
        let node = self.current_node();
        self.calls.push(HostCall::AddAttribute {
            node: node.clone(),
            attr: def.attr.clone(),
        });

        if let Some(status) = self.failures.attribute.get(&def.attr) {
            return *status;
        }
        let attrs = self.attributes.entry(node).or_default();
        if attrs.iter().any(|a| a.attr == def.attr) {
            return StatusCode::InvalidParameter;
        }
        attrs.push(def.clone());
        StatusCode::Success
    }

    fn set_attribute_flag(
        &mut self,
        attr: &AttributeRef,
        flag: AttributeFlag,
        value: bool,
    ) -> StatusCode {
        self.calls.push(HostCall::SetFlag {
            attr: attr.clone(),
            flag,
            value,
        });

        self.failures
            .flag
            .get(&(attr.clone(), flag))
            .copied()
            .unwrap_or(StatusCode::Success)
    }

    fn declare_dependency(&mut self, trigger: &AttributeRef, affected: &AttributeRef) -> StatusCode {
        self.calls.push(HostCall::DeclareDependency {
            trigger: trigger.clone(),
            affected: affected.clone(),
        });

        if let Some(status) = self
            .failures
            .dependency
            .get(&(trigger.clone(), affected.clone()))
        {
            return *status;
        }
        let node = self.current_node();
        let pair = (trigger.clone(), affected.clone());
        let pairs = self.dependencies.entry(node).or_default();
        if !pairs.contains(&pair) {
            pairs.push(pair);
        }
        StatusCode::Success
    }
}
