//! Exception-safe node recompute.

use crate::attribute::AttributeRef;
use crate::entity::Node;
use crate::host::DataBlock;
use crate::status::{self, StatusCode};

/// Run a node's recompute hook for `output` and settle on one status code.
///
/// On success every staged output write and clean mark is committed. On
/// failure (returned diagnostic or panic) nothing staged is kept, the
/// diagnostic's origin is back-filled with the node name, the formatted line
/// is logged, and its status is returned.
pub fn compute<N>(node: &mut N, output: &AttributeRef, data: &mut DataBlock) -> StatusCode
where
    N: Node + ?Sized,
{
    data.discard();
    tracing::trace!(node = %node.info().identity, output = %output, "compute");

    match status::catch(|| node.compute_process(output, data)) {
        Ok(()) => {
            data.commit();
            StatusCode::Success
        }
        Err(mut diag) => {
            data.discard();
            diag.fill_origin(&node.info().identity.name);
            status::report(&diag);
            diag.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValue;
    use crate::core::NodeId;
    use crate::entity::NodeInfo;
    use crate::monitoring::LogCapture;
    use crate::status::{DiagResult, Diagnostic};

    const IN: AttributeRef = AttributeRef::from_static("input");
    const OUT_A: AttributeRef = AttributeRef::from_static("outA");
    const OUT_B: AttributeRef = AttributeRef::from_static("outB");

    /// Writes `outA`, then fails or panics before `outB` depending on input.
    struct Split {
        info: NodeInfo,
    }

    impl Node for Split {
        fn info(&self) -> &NodeInfo {
            &self.info
        }

        fn compute_process(&mut self, output: &AttributeRef, data: &mut DataBlock) -> DiagResult<()> {
            if *output != OUT_A && *output != OUT_B {
                return Err(Diagnostic::new(
                    StatusCode::InvalidParameter,
                    format!("unexpected plug {}", output),
                ));
            }
            let value = data.input(&IN)?.as_double()?;
            data.set_output(&OUT_A, AttributeValue::Double(value));
            data.set_clean(&OUT_A);
            if value < 0.0 {
                return Err(Diagnostic::new(StatusCode::Failure, "negative input").with_origin("split::outB"));
            }
            if value > 100.0 {
                panic!("input out of range");
            }
            data.set_output(&OUT_B, AttributeValue::Double(value * 2.0));
            data.set_clean(&OUT_B);
            Ok(())
        }
    }

    fn split() -> Split {
        Split {
            info: NodeInfo::new(NodeId(0x200), "split"),
        }
    }

    #[test]
    fn test_success_commits_all_outputs() {
        let mut node = split();
        let mut data = DataBlock::new().with_value(IN, AttributeValue::Double(3.0));

        assert_eq!(compute(&mut node, &OUT_B, &mut data), StatusCode::Success);
        assert_eq!(data.value(&OUT_A), Some(&AttributeValue::Double(3.0)));
        assert_eq!(data.value(&OUT_B), Some(&AttributeValue::Double(6.0)));
        assert!(data.is_clean(&OUT_A) && data.is_clean(&OUT_B));
    }

    #[test]
    fn test_failure_keeps_nothing_and_logs() {
        let capture = LogCapture::new();
        let mut node = split();
        let mut data = DataBlock::new().with_value(IN, AttributeValue::Double(-1.0));

        let status = tracing::subscriber::with_default(capture.subscriber(), || {
            compute(&mut node, &OUT_A, &mut data)
        });

        assert_eq!(status, StatusCode::Failure);
        assert!(data.value(&OUT_A).is_none());
        assert!(!data.is_clean(&OUT_A));
        let logs = capture.contents();
        assert!(logs.contains("[Failure] split::outB : negative input"));
    }

    #[test]
    fn test_origin_backfilled_with_node_name() {
        let capture = LogCapture::new();
        let mut node = split();
        let mut data = DataBlock::new();
        let other = AttributeRef::new("other");

        let status = tracing::subscriber::with_default(capture.subscriber(), || {
            compute(&mut node, &other, &mut data)
        });

        assert_eq!(status, StatusCode::InvalidParameter);
        assert!(capture
            .contents()
            .contains("[InvalidParameter] split : unexpected plug other"));
    }

    #[test]
    fn test_missing_input_reported() {
        let mut node = split();
        let mut data = DataBlock::new();
        assert_eq!(compute(&mut node, &OUT_A, &mut data), StatusCode::NotFound);
    }

    #[test]
    fn test_panic_becomes_failure() {
        let capture = LogCapture::new();
        let mut node = split();
        let mut data = DataBlock::new().with_value(IN, AttributeValue::Double(500.0));

        let status = tracing::subscriber::with_default(capture.subscriber(), || {
            compute(&mut node, &OUT_A, &mut data)
        });

        assert_eq!(status, StatusCode::Failure);
        assert!(data.value(&OUT_A).is_none());
        assert!(capture.contents().contains("panicked: input out of range"));
    }

    #[test]
    fn test_every_diagnostic_status_is_returned() {
        struct Raise {
            info: NodeInfo,
            status: StatusCode,
        }

        impl Node for Raise {
            fn info(&self) -> &NodeInfo {
                &self.info
            }

            fn compute_process(&mut self, _output: &AttributeRef, _data: &mut DataBlock) -> DiagResult<()> {
                Err(Diagnostic::new(self.status, "raised"))
            }
        }

        for code in StatusCode::ALL.into_iter().filter(|c| c.is_error()) {
            let capture = LogCapture::new();
            let mut node = Raise {
                info: NodeInfo::new(NodeId(0x300), "raise"),
                status: code,
            };
            let mut data = DataBlock::new();
            let status = tracing::subscriber::with_default(capture.subscriber(), || {
                node.compute(&OUT_A, &mut data)
            });

            assert_eq!(status, code);
            let logs = capture.contents();
            assert!(logs.contains(code.name()), "{}", logs);
            assert!(logs.contains("raised"));
        }
    }

    #[test]
    fn test_default_hook_never_touches_data() {
        struct Empty {
            info: NodeInfo,
        }

        impl Node for Empty {
            fn info(&self) -> &NodeInfo {
                &self.info
            }
        }

        let mut node = Empty {
            info: NodeInfo::new(NodeId(0x301), "empty"),
        };
        for out in [&IN, &OUT_A, &OUT_B] {
            let mut data = DataBlock::new().with_value(IN, AttributeValue::Int(1));
            assert_eq!(node.compute(out, &mut data), StatusCode::UnknownParameter);
            assert_eq!(data.value(&IN), Some(&AttributeValue::Int(1)));
            assert!(!data.has_pending());
        }
    }
}
