//! Per-evaluation data block.

use crate::attribute::{AttributeRef, AttributeValue};
use crate::status::{DiagResult, Diagnostic, StatusCode};
use std::collections::{HashMap, HashSet};

/// Mutable store a node reads inputs from and writes outputs to.
///
/// Output writes and clean marks made during a compute are staged; they only
/// become visible once the compute succeeds.
#[derive(Clone, Debug, Default)]
pub struct DataBlock {
    values: HashMap<AttributeRef, AttributeValue>,
    clean: HashSet<AttributeRef>,
    staged: Vec<(AttributeRef, AttributeValue)>,
    staged_clean: Vec<AttributeRef>,
}

impl DataBlock {
    /// Create an empty data block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value.
    pub fn with_value(mut self, attr: AttributeRef, value: AttributeValue) -> Self {
        self.values.insert(attr, value);
        self
    }

    /// Overwrite a committed value (host side).
    pub fn set_value(&mut self, attr: AttributeRef, value: AttributeValue) {
        self.values.insert(attr, value);
    }

    /// Read an input value.
    pub fn input(&self, attr: &AttributeRef) -> DiagResult<&AttributeValue> {
        self.values.get(attr).ok_or_else(|| {
            Diagnostic::new(StatusCode::NotFound, format!("no value for attribute {}", attr))
        })
    }

    /// Stage an output value.
    pub fn set_output(&mut self, attr: &AttributeRef, value: AttributeValue) {
        self.staged.push((attr.clone(), value));
    }

    /// Stage a clean mark for an output.
    pub fn set_clean(&mut self, attr: &AttributeRef) {
        self.staged_clean.push(attr.clone());
    }

    /// Committed value of an attribute.
    pub fn value(&self, attr: &AttributeRef) -> Option<&AttributeValue> {
        self.values.get(attr)
    }

    /// Whether an attribute is marked clean.
    pub fn is_clean(&self, attr: &AttributeRef) -> bool {
        self.clean.contains(attr)
    }

    /// Mark an attribute dirty (host side).
    pub fn mark_dirty(&mut self, attr: &AttributeRef) {
        self.clean.remove(attr);
    }

    /// Whether anything is staged.
    pub fn has_pending(&self) -> bool {
        !self.staged.is_empty() || !self.staged_clean.is_empty()
    }

    pub(crate) fn commit(&mut self) {
        for (attr, value) in self.staged.drain(..) {
            self.values.insert(attr, value);
        }
        for attr in self.staged_clean.drain(..) {
            self.clean.insert(attr);
        }
    }

    pub(crate) fn discard(&mut self) {
        self.staged.clear();
        self.staged_clean.clear();
    }
}
