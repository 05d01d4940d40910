//! Starter dependency node: copies `input` to `output`.

use crate::attribute::{
    add_attribute_with, declare, AttributeDef, AttributeOptions, AttributeRef, AttributeValue,
    NumericType,
};
use crate::core::NodeId;
use crate::entity::{Node, NodeInfo};
use crate::host::{AttributeHost, DataBlock};
use crate::status::{boundary, DiagResult, Diagnostic, StatusCode};

/// Template dependency node.
pub struct TemplateNode {
    info: NodeInfo,
}

impl TemplateNode {
    pub const NAME: &'static str = "templateNode";
    pub const ID: NodeId = NodeId(0x70050);
    pub const INPUT: AttributeRef = AttributeRef::from_static("input");
    pub const OUTPUT: AttributeRef = AttributeRef::from_static("output");

    /// Creator handed to the host.
    pub fn create() -> Box<dyn Node> {
        Box::new(Self {
            info: NodeInfo::new(Self::ID, Self::NAME),
        })
    }

    /// Attribute initializer handed to the host.
    pub fn initialize(host: &mut dyn AttributeHost) -> StatusCode {
        boundary(Self::NAME, || {
            let input = AttributeDef::numeric(Self::INPUT, "in", NumericType::Double, 0.0);
            add_attribute_with(host, &input, &AttributeOptions::default())?;

            let output = AttributeDef::numeric(Self::OUTPUT, "out", NumericType::Double, 0.0);
            add_attribute_with(host, &output, &AttributeOptions::output())?;

            declare(host, &[&Self::INPUT], &[&Self::OUTPUT])
        })
    }
}

impl Node for TemplateNode {
    fn info(&self) -> &NodeInfo {
        &self.info
    }

    fn compute_process(&mut self, output: &AttributeRef, data: &mut DataBlock) -> DiagResult<()> {
        if *output != Self::OUTPUT {
            return Err(Diagnostic::new(
                StatusCode::UnknownParameter,
                format!("unexpected plug {}", output),
            ));
        }

        let value = data.input(&Self::INPUT)?.as_double()?;
        data.set_output(&Self::OUTPUT, AttributeValue::Double(value));
        data.set_clean(&Self::OUTPUT);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityKind;
    use crate::host::MemoryHost;
    use crate::registry::EntityRegistry;

    fn registered_host() -> MemoryHost {
        let mut host = MemoryHost::new();
        let mut nodes: EntityRegistry<dyn Node> = EntityRegistry::new();
        nodes
            .register(
                &mut host,
                TemplateNode::create(),
                TemplateNode::create,
                Some(TemplateNode::initialize),
            )
            .unwrap();
        host
    }

    #[test]
    fn test_initializer_declares_attributes() {
        let host = registered_host();
        assert!(host.is_registered(EntityKind::Node, TemplateNode::NAME));

        let attrs: Vec<&str> = host
            .attributes(TemplateNode::NAME)
            .iter()
            .map(|d| d.attr.name())
            .collect();
        assert_eq!(attrs, vec!["input", "output"]);
        assert_eq!(
            host.affected_by(TemplateNode::NAME, &TemplateNode::INPUT),
            vec![&TemplateNode::OUTPUT]
        );
    }

    #[test]
    fn test_compute_copies_input() {
        let host = registered_host();
        let mut node = host.create_node(TemplateNode::NAME).unwrap();
        let mut data = host.data_block(TemplateNode::NAME);
        host.set_input(
            TemplateNode::NAME,
            &mut data,
            &TemplateNode::INPUT,
            AttributeValue::Double(4.25),
        );
        assert!(!data.is_clean(&TemplateNode::OUTPUT));

        assert_eq!(node.compute(&TemplateNode::OUTPUT, &mut data), StatusCode::Success);
        assert_eq!(
            data.value(&TemplateNode::OUTPUT),
            Some(&AttributeValue::Double(4.25))
        );
        assert!(data.is_clean(&TemplateNode::OUTPUT));
    }

    #[test]
    fn test_unexpected_plug() {
        let host = registered_host();
        let mut node = host.create_node(TemplateNode::NAME).unwrap();
        let mut data = host.data_block(TemplateNode::NAME);
        assert_eq!(
            node.compute(&TemplateNode::INPUT, &mut data),
            StatusCode::UnknownParameter
        );
    }

    #[test]
    fn test_rejected_dependency_fails_registration() {
        let mut host = MemoryHost::new().with_dependency_failure(
            &TemplateNode::INPUT,
            &TemplateNode::OUTPUT,
            StatusCode::Failure,
        );
        let mut nodes: EntityRegistry<dyn Node> = EntityRegistry::new();
        let result = nodes.register(
            &mut host,
            TemplateNode::create(),
            TemplateNode::create,
            Some(TemplateNode::initialize),
        );

        assert_eq!(result.unwrap_err().status(), StatusCode::Failure);
        assert!(nodes.is_empty());
        assert!(host.attributes(TemplateNode::NAME).is_empty());
        assert!(!host.is_registered(EntityKind::Node, TemplateNode::NAME));
    }
}
