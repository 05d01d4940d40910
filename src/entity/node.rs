//! Dependency-graph nodes.

use crate::attribute::AttributeRef;
use crate::core::{Identity, NodeId};
use crate::dispatch;
use crate::entity::{Capabilities, Entity, EntityClass};
use crate::host::{Creator, DataBlock};
use crate::status::{DiagResult, Diagnostic, StatusCode};
use serde::{Deserialize, Serialize};

/// Dependency-graph node type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Plain dependency node
    #[default]
    Depend,
    Locator,
    Deformer,
    Manip,
    Shape,
    Transform,
}

/// Static description of a node type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    /// Name and type id
    pub identity: Identity,
    /// Graph node type
    pub node_type: NodeType,
    /// Custom classification, e.g. `drawdb/geometry/...`
    pub classification: Option<String>,
}

impl NodeInfo {
    /// Create a dependency node description.
    pub fn new(id: NodeId, name: &str) -> Self {
        Self {
            identity: Identity::node(id, name),
            node_type: NodeType::Depend,
            classification: None,
        }
    }

    /// Set node type.
    pub fn with_type(mut self, node_type: NodeType) -> Self {
        self.node_type = node_type;
        self
    }

    /// Set custom classification.
    pub fn with_classification(mut self, classification: &str) -> Self {
        self.classification = Some(classification.to_string());
        self
    }
}

/// Node trait that all graph nodes must implement.
pub trait Node {
    /// Static description.
    fn info(&self) -> &NodeInfo;

    /// Recompute `output` from the inputs in `data`.
    ///
    /// Write outputs with [`DataBlock::set_output`] and mark them with
    /// [`DataBlock::set_clean`]; nothing is committed unless this returns
    /// `Ok`. The default raises `UnknownParameter` so that a node without
    /// logic never reports success.
    fn compute_process(&mut self, output: &AttributeRef, _data: &mut DataBlock) -> DiagResult<()> {
        Err(Diagnostic::new(
            StatusCode::UnknownParameter,
            format!("no compute logic for {}", output),
        ))
    }

    /// Host-facing recompute entry point.
    fn compute(&mut self, output: &AttributeRef, data: &mut DataBlock) -> StatusCode {
        dispatch::compute(self, output, data)
    }
}

impl<'a> Entity for dyn Node + 'a {
    fn identity(&self) -> &Identity {
        &self.info().identity
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::Node {
            node_type: self.info().node_type,
        }
    }

    fn classification(&self) -> Option<&str> {
        self.info().classification.as_deref()
    }
}

impl EntityClass for dyn Node {
    fn bind(create: fn() -> Box<Self>) -> Creator {
        Creator::Node(create)
    }
}
