//! Extension session.
//!
//! One session exists per loaded extension. It owns the host handle and one
//! registry per entity kind, and provides the load/unload entry points.

use crate::core::{now, EntityKind, Timestamp};
use crate::entity::{Command, EntityClass, Node, Translator};
use crate::host::{Host, Initializer};
use crate::monitoring;
use crate::registry::EntityRegistry;
use crate::session::config::SessionConfig;
use crate::status::{boundary, throw_if, DiagResult, StatusCode};
use uuid::Uuid;

/// Per-kind registration functions supplied by the extension author.
///
/// Each function adds that kind's entities through the given registrar.
/// The defaults register nothing.
pub trait Extension {
    /// Register commands.
    fn register_commands(&self, _commands: &mut Registrar<'_, dyn Command>) -> DiagResult<()> {
        Ok(())
    }

    /// Register node types.
    fn register_nodes(&self, _nodes: &mut Registrar<'_, dyn Node>) -> DiagResult<()> {
        Ok(())
    }

    /// Register file translators.
    fn register_translators(&self, _translators: &mut Registrar<'_, dyn Translator>) -> DiagResult<()> {
        Ok(())
    }
}

/// Registration handle for one entity kind, valid during `on_load`.
pub struct Registrar<'a, E: ?Sized> {
    host: &'a mut dyn Host,
    registry: &'a mut EntityRegistry<E>,
}

impl<'a, E: ?Sized + EntityClass> Registrar<'a, E> {
    /// Register an entity; the prototype kept by the registry is built
    /// with the same factory the host will use.
    pub fn add(&mut self, create: fn() -> Box<E>) -> DiagResult<()> {
        self.registry.register(&mut *self.host, create(), create, None)
    }

    /// Register an explicitly built prototype.
    pub fn add_instance(&mut self, entity: Box<E>, create: fn() -> Box<E>) -> DiagResult<()> {
        self.registry.register(&mut *self.host, entity, create, None)
    }

    /// Number of entities of this kind registered so far.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether nothing of this kind is registered yet.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<'a> Registrar<'a, dyn Node> {
    /// Register a node type together with its attribute initializer.
    pub fn add_node(&mut self, create: fn() -> Box<dyn Node>, initialize: Initializer) -> DiagResult<()> {
        self.registry
            .register(&mut *self.host, create(), create, Some(initialize))
    }
}

/// Session lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing registered yet, or fully unloaded
    Unloaded,
    /// Every kind registered
    Loaded,
    /// Load or unload stopped part way
    Failed,
}

/// A host session for one extension.
pub struct Session<H: Host> {
    id: Uuid,
    config: SessionConfig,
    host: H,
    commands: EntityRegistry<dyn Command>,
    nodes: EntityRegistry<dyn Node>,
    translators: EntityRegistry<dyn Translator>,
    state: SessionState,
    loaded_at: Option<Timestamp>,
}

impl<H: Host> Session<H> {
    /// Create a session around a host handle.
    pub fn new(host: H, config: SessionConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            host,
            commands: EntityRegistry::new(),
            nodes: EntityRegistry::new(),
            translators: EntityRegistry::new(),
            state: SessionState::Unloaded,
            loaded_at: None,
        }
    }

    /// Install the global log subscriber described by the config.
    pub fn install_logging(&self) -> crate::core::Result<()> {
        monitoring::init_logging(&self.config.logging)
    }

    /// Load entry point: announce the extension, then register every kind
    /// in the configured order.
    ///
    /// Stops at the first failure; entities registered before it stay
    /// registered and can be removed with [`Session::on_unload`]. A failed
    /// session refuses to load again until it has been unloaded.
    pub fn on_load(&mut self, extension: &dyn Extension) -> StatusCode {
        let project = self.config.project_name.clone();
        match self.state {
            SessionState::Unloaded => {}
            SessionState::Loaded => {
                tracing::warn!(session = %self.id, "{} is already loaded", project);
                return StatusCode::Failure;
            }
            SessionState::Failed => {
                tracing::warn!(
                    session = %self.id,
                    "{} is partially registered; call on_unload before loading again",
                    project
                );
                return StatusCode::Failure;
            }
        }

        tracing::debug!(session = %self.id, "{}start to load {}", self.banner_prefix(), project);
        let order = self.config.load_order.clone();
        let info = self.config.extension_info();
        let status = boundary(&format!("{} on_load", project), || {
            throw_if(
                self.host.register_extension(&info),
                format!("host refused extension {} from {}", info.name, info.vendor),
            )?;
            for kind in order {
                self.register_kind(kind, extension)?;
            }
            Ok(())
        });

        if status.is_success() {
            self.state = SessionState::Loaded;
            self.loaded_at = Some(now());
            tracing::info!(
                session = %self.id,
                commands = self.commands.len(),
                nodes = self.nodes.len(),
                translators = self.translators.len(),
                "{}{} - version {}",
                self.banner_prefix(),
                project,
                self.config.version
            );
        } else {
            self.state = SessionState::Failed;
            tracing::error!(session = %self.id, %status, "Failed to load {} plug-in.", project);
        }
        status
    }

    /// Unload entry point: deregister every kind in reverse load order.
    pub fn on_unload(&mut self) -> StatusCode {
        let project = self.config.project_name.clone();
        tracing::debug!(session = %self.id, "{}start to unload {}", self.banner_prefix(), project);

        let order: Vec<EntityKind> = self.config.load_order.iter().rev().copied().collect();
        let status = boundary(&format!("{} on_unload", project), || {
            for kind in order {
                self.deregister_kind(kind)?;
            }
            Ok(())
        });

        if status.is_success() {
            self.state = SessionState::Unloaded;
            self.loaded_at = None;
            tracing::info!(session = %self.id, "{} unloaded", project);
        } else {
            self.state = SessionState::Failed;
            tracing::error!(session = %self.id, %status, "Failed to unload {} plug-in.", project);
        }
        status
    }

    fn register_kind(&mut self, kind: EntityKind, extension: &dyn Extension) -> DiagResult<()> {
        tracing::debug!(%kind, "adding entities");
        let host: &mut dyn Host = &mut self.host;
        match kind {
            EntityKind::Command => extension.register_commands(&mut Registrar {
                host,
                registry: &mut self.commands,
            }),
            EntityKind::Node => extension.register_nodes(&mut Registrar {
                host,
                registry: &mut self.nodes,
            }),
            EntityKind::Translator => extension.register_translators(&mut Registrar {
                host,
                registry: &mut self.translators,
            }),
        }
    }

    fn deregister_kind(&mut self, kind: EntityKind) -> DiagResult<()> {
        tracing::debug!(%kind, "removing entities");
        match kind {
            EntityKind::Command => self.commands.deregister_all(&mut self.host),
            EntityKind::Node => self.nodes.deregister_all(&mut self.host),
            EntityKind::Translator => self.translators.deregister_all(&mut self.host),
        }
    }

    fn banner_prefix(&self) -> &'static str {
        if self.config.dev_mode {
            "[Development Mode] "
        } else {
            ""
        }
    }

    /// Session id, attached to every log line of this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// When the last successful load finished.
    pub fn loaded_at(&self) -> Option<Timestamp> {
        self.loaded_at
    }

    /// Host handle.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host handle.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Registered commands.
    pub fn commands(&self) -> &EntityRegistry<dyn Command> {
        &self.commands
    }

    /// Registered node types.
    pub fn nodes(&self) -> &EntityRegistry<dyn Node> {
        &self.nodes
    }

    /// Registered translators.
    pub fn translators(&self) -> &EntityRegistry<dyn Translator> {
        &self.translators
    }

    /// Total number of registered entities.
    pub fn entity_count(&self) -> usize {
        self.commands.len() + self.nodes.len() + self.translators.len()
    }

    /// Give back the host handle.
    pub fn into_host(self) -> H {
        self.host
    }
}
