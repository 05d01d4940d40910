//! Common types used across plugin-base modules.

use serde::{Deserialize, Serialize};

/// The closed set of entity kinds a host knows how to register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Invocable command
    Command,
    /// Dependency-graph node
    Node,
    /// File-format translator
    Translator,
}

impl EntityKind {
    /// All kinds, in the default load order.
    pub const ALL: [EntityKind; 3] = [EntityKind::Command, EntityKind::Node, EntityKind::Translator];
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Command => write!(f, "command"),
            EntityKind::Node => write!(f, "node"),
            EntityKind::Translator => write!(f, "translator"),
        }
    }
}

/// Numeric node type id. The host requires these to be unique across
/// every loaded extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#07x}", self.0)
    }
}

/// Name (plus node id, for nodes) an entity is registered under.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Registered name
    pub name: String,
    /// Node type id
    pub id: Option<NodeId>,
}

impl Identity {
    /// Identity carrying only a name (commands, translators).
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: None,
        }
    }

    /// Identity of a node type.
    pub fn node(id: NodeId, name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: Some(id),
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} ({})", self.name, id),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Timestamp wrapper for consistent serialization.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Get current UTC timestamp.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}
