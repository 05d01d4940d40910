//! Bulk attribute dependency declaration.

use crate::attribute::definition::AttributeRef;
use crate::host::AttributeHost;
use crate::status::{throw_if, DiagResult};
use std::collections::HashSet;

/// Declare `trigger -> affected` for every pair of the cross product,
/// trigger-major, stopping at the first pair the host rejects.
pub fn declare(
    host: &mut dyn AttributeHost,
    triggers: &[&AttributeRef],
    affected: &[&AttributeRef],
) -> DiagResult<()> {
    for (i, trigger) in triggers.iter().enumerate() {
        for (j, out) in affected.iter().enumerate() {
            let index = i * affected.len() + j;
            throw_if(
                host.declare_dependency(trigger, out),
                format!(
                    "dependency #{} [{}][{}] {} -> {} rejected",
                    index, i, j, trigger, out
                ),
            )?;
        }
    }
    Ok(())
}

/// [`declare`], then make every affected attribute also depend on `state`.
///
/// `state` stands for node-wide state that is not an attribute value, such
/// as a live device reading. Pairs the explicit pass already declared are
/// not issued twice.
pub fn declare_with_state(
    host: &mut dyn AttributeHost,
    triggers: &[&AttributeRef],
    affected: &[&AttributeRef],
    state: &AttributeRef,
) -> DiagResult<()> {
    declare(host, triggers, affected)?;

    let mut seen = HashSet::new();
    if triggers.contains(&state) {
        seen.extend(affected.iter().copied());
    }
    for (j, out) in affected.iter().enumerate() {
        if !seen.insert(*out) {
            continue;
        }
        throw_if(
            host.declare_dependency(state, out),
            format!("state dependency [{}] {} -> {} rejected", j, state, out),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCall, MemoryHost};
    use crate::status::StatusCode;

    fn declared(host: &MemoryHost) -> Vec<(String, String)> {
        host.calls()
            .iter()
            .filter_map(|c| match c {
                HostCall::DeclareDependency { trigger, affected } => {
                    Some((trigger.to_string(), affected.to_string()))
                }
                _ => None,
            })
            .collect()
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_cross_product_order() {
        let (a, b) = (AttributeRef::new("A"), AttributeRef::new("B"));
        let (x, y) = (AttributeRef::new("X"), AttributeRef::new("Y"));
        let mut host = MemoryHost::new();

        declare(&mut host, &[&a, &b], &[&x, &y]).unwrap();
        assert_eq!(
            declared(&host),
            vec![pair("A", "X"), pair("A", "Y"), pair("B", "X"), pair("B", "Y")]
        );
    }

    #[test]
    fn test_rejected_pair_is_identified() {
        let (a, b) = (AttributeRef::new("A"), AttributeRef::new("B"));
        let (x, y) = (AttributeRef::new("X"), AttributeRef::new("Y"));
        let mut host = MemoryHost::new().with_dependency_failure(&b, &x, StatusCode::InvalidParameter);

        let err = declare(&mut host, &[&a, &b], &[&x, &y]).unwrap_err();
        assert_eq!(err.status(), StatusCode::InvalidParameter);
        assert!(err.message().contains("#2 [1][0] B -> X"));
        // (B, Y) is never attempted
        assert_eq!(declared(&host), vec![pair("A", "X"), pair("A", "Y"), pair("B", "X")]);
    }

    #[test]
    fn test_last_pair_rejected() {
        let (a, b) = (AttributeRef::new("A"), AttributeRef::new("B"));
        let (x, y) = (AttributeRef::new("X"), AttributeRef::new("Y"));
        let mut host = MemoryHost::new().with_dependency_failure(&b, &y, StatusCode::Failure);

        let err = declare(&mut host, &[&a, &b], &[&x, &y]).unwrap_err();
        assert!(err.message().contains("#3 [1][1] B -> Y"));
        assert_eq!(declared(&host).len(), 4);
    }

    #[test]
    fn test_state_pass_runs_after_explicit_pairs() {
        let time = AttributeRef::new("time");
        let state = AttributeRef::new("deviceState");
        let (x, y) = (AttributeRef::new("outX"), AttributeRef::new("outY"));
        let mut host = MemoryHost::new();

        declare_with_state(&mut host, &[&time], &[&x, &y], &state).unwrap();
        assert_eq!(
            declared(&host),
            vec![
                pair("time", "outX"),
                pair("time", "outY"),
                pair("deviceState", "outX"),
                pair("deviceState", "outY"),
            ]
        );
    }

    #[test]
    fn test_state_already_a_trigger_not_redeclared() {
        let time = AttributeRef::new("time");
        let x = AttributeRef::new("outX");
        let mut host = MemoryHost::new();

        declare_with_state(&mut host, &[&time], &[&x, &x], &time).unwrap();
        assert_eq!(declared(&host), vec![pair("time", "outX"), pair("time", "outX")]);
    }

    #[test]
    fn test_state_failure_names_state_pair() {
        let time = AttributeRef::new("time");
        let state = AttributeRef::new("deviceState");
        let x = AttributeRef::new("outX");
        let mut host = MemoryHost::new().with_dependency_failure(&state, &x, StatusCode::NotFound);

        let err = declare_with_state(&mut host, &[&time], &[&x], &state).unwrap_err();
        assert_eq!(err.status(), StatusCode::NotFound);
        assert!(err.message().contains("state dependency [0] deviceState -> outX"));
    }
}
