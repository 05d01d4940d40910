//! Entity registry.
//!
//! Owns the entities of one kind and keeps them in lock-step with the host's
//! own entity table.

use crate::core::{now, Timestamp};
use crate::entity::EntityClass;
use crate::host::{Host, Initializer, Registration};
use crate::status::{throw_if, DiagResult};

/// Registered entity entry.
pub struct RegisteredEntity<E: ?Sized> {
    /// Entity instance
    pub entity: Box<E>,
    /// Registration time
    pub registered_at: Timestamp,
}

/// Ordered registry of owned entities of one kind.
pub struct EntityRegistry<E: ?Sized> {
    /// Entries, in registration order
    entries: Vec<RegisteredEntity<E>>,
}

impl<E: ?Sized + EntityClass> EntityRegistry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an entity with the host and take ownership of it.
    ///
    /// The entity is only kept if the host accepted it. Duplicate names are
    /// not checked here; that is left to the host.
    pub fn register(
        &mut self,
        host: &mut dyn Host,
        entity: Box<E>,
        create: fn() -> Box<E>,
        initialize: Option<Initializer>,
    ) -> DiagResult<()> {
        let kind = entity.kind();
        let registration = Registration {
            identity: entity.identity().clone(),
            creator: E::bind(create),
            initializer: initialize,
            capabilities: entity.capabilities(),
            classification: entity.classification().map(str::to_string),
        };

        throw_if(
            host.register_entity(registration),
            format!("failed to register {} {}", kind, entity.identity()),
        )?;
        tracing::debug!(%kind, entity = %entity.identity(), "registered");

        self.entries.push(RegisteredEntity {
            entity,
            registered_at: now(),
        });
        Ok(())
    }

    /// Deregister every entity in registration order, stopping at the first
    /// one the host refuses.
    ///
    /// Entities removed before the failure are released; the refused one and
    /// everything after it stay registered. Nothing is retried.
    pub fn deregister_all(&mut self, host: &mut dyn Host) -> DiagResult<()> {
        let mut removed = 0;
        let mut outcome = Ok(());

        for entry in &self.entries {
            let entity = &entry.entity;
            let status = host.deregister_entity(entity.kind(), entity.identity());
            if status.is_error() {
                tracing::debug!(
                    kind = %entity.kind(),
                    entity = %entity.identity(),
                    %status,
                    "failed to deregister"
                );
                outcome = throw_if(
                    status,
                    format!("failed to deregister {} {}", entity.kind(), entity.identity()),
                );
                break;
            }
            tracing::debug!(kind = %entity.kind(), entity = %entity.identity(), "deregistered");
            removed += 1;
        }

        self.entries.drain(..removed);
        outcome
    }

    /// Find an entity by registered name.
    pub fn get(&self, name: &str) -> Option<&E> {
        self.entries
            .iter()
            .find(|e| e.entity.identity().name == name)
            .map(|e| e.entity.as_ref())
    }

    /// Iterate over entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(|e| e.entity.as_ref())
    }

    /// Entries with their registration times.
    pub fn entries(&self) -> &[RegisteredEntity<E>] {
        &self.entries
    }

    /// Registered names in order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|e| e.identity().name.as_str()).collect()
    }

    /// Number of registered entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: ?Sized + EntityClass> Default for EntityRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityKind;
    use crate::entity::{Command, CommandInfo, Entity};
    use crate::host::{HostCall, MemoryHost};
    use crate::monitoring::LogCapture;
    use crate::status::StatusCode;

    struct Named {
        info: CommandInfo,
    }

    impl Command for Named {
        fn info(&self) -> &CommandInfo {
            &self.info
        }
    }

    fn named(name: &str) -> Box<dyn Command> {
        Box::new(Named {
            info: CommandInfo::new(name, false),
        })
    }

    fn create() -> Box<dyn Command> {
        named("created")
    }

    const FIVE: [&str; 5] = ["c1", "c2", "c3", "c4", "c5"];

    fn registry_of(host: &mut MemoryHost, names: &[&str]) -> EntityRegistry<dyn Command> {
        let mut registry = EntityRegistry::new();
        for name in names {
            registry.register(host, named(name), create, None).unwrap();
        }
        registry
    }

    fn calls_of(host: &MemoryHost, deregister: bool) -> Vec<String> {
        host.calls()
            .iter()
            .filter_map(|c| match c {
                HostCall::Register { name, .. } if !deregister => Some(name.clone()),
                HostCall::Deregister { name, .. } if deregister => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_registry_creation() {
        let registry: EntityRegistry<dyn Command> = EntityRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_then_deregister_in_order() {
        let mut host = MemoryHost::new();
        let mut registry = registry_of(&mut host, &FIVE);

        assert_eq!(registry.names(), FIVE.to_vec());
        assert_eq!(calls_of(&host, false), FIVE.to_vec());
        assert_eq!(host.registered_names(EntityKind::Command), FIVE.to_vec());

        registry.deregister_all(&mut host).unwrap();
        assert_eq!(calls_of(&host, true), FIVE.to_vec());
        assert!(registry.is_empty());
        assert!(host.registered().is_empty());
    }

    #[test]
    fn test_rejected_registration_not_kept() {
        let mut host = MemoryHost::new().with_register_failure("c2", StatusCode::LicenseFailure);
        let mut registry = EntityRegistry::new();

        registry.register(&mut host, named("c1"), create, None).unwrap();
        let err = registry.register(&mut host, named("c2"), create, None).unwrap_err();

        assert_eq!(err.status(), StatusCode::LicenseFailure);
        assert!(err.message().contains("c2"));
        assert_eq!(registry.names(), vec!["c1"]);
    }

    #[test]
    fn test_duplicates_left_to_host() {
        let mut host = MemoryHost::new();
        let mut registry = EntityRegistry::new();
        registry.register(&mut host, named("same"), create, None).unwrap();

        let err = registry.register(&mut host, named("same"), create, None).unwrap_err();
        assert_eq!(err.status(), StatusCode::Failure);
        assert_eq!(registry.len(), 1);
        assert_eq!(calls_of(&host, false), vec!["same", "same"]);
    }

    #[test]
    fn test_deregister_stops_at_first_failure() {
        let capture = LogCapture::new();
        let mut host = MemoryHost::new().with_deregister_failure("c3", StatusCode::Failure);
        let mut registry = registry_of(&mut host, &FIVE);

        let err = tracing::subscriber::with_default(capture.subscriber(), || {
            registry.deregister_all(&mut host)
        })
        .unwrap_err();

        assert_eq!(err.status(), StatusCode::Failure);
        assert!(err.message().contains("c3"));
        assert_eq!(calls_of(&host, true), vec!["c1", "c2", "c3"]);
        // no rollback: c1, c2 gone from the host; c3..c5 still there
        assert_eq!(host.registered_names(EntityKind::Command), vec!["c3", "c4", "c5"]);
        assert_eq!(registry.names(), vec!["c3", "c4", "c5"]);
        assert!(capture.contents().contains("failed to deregister"));

        host.clear_deregister_failure("c3");
        registry.deregister_all(&mut host).unwrap();
        assert!(registry.is_empty());
        assert!(host.registered().is_empty());
    }

    #[test]
    fn test_lookup() {
        let mut host = MemoryHost::new();
        let registry = registry_of(&mut host, &["a", "b"]);

        assert_eq!(registry.get("b").map(|c| c.display_name()), Some("b"));
        assert!(registry.get("z").is_none());
        assert_eq!(registry.iter().count(), 2);
        assert!(registry.entries()[0].registered_at <= registry.entries()[1].registered_at);
    }
}
