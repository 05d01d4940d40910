//! Attribute references, values and definitions.

use crate::status::{DiagResult, Diagnostic, StatusCode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Reference to an attribute of a node type, by long name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeRef(Cow<'static, str>);

impl AttributeRef {
    /// Reference usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Reference from an owned or borrowed name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Long name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttributeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value held by an attribute in a data block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Double(f64),
    Int(i64),
    Bool(bool),
    Enum(i16),
    /// Time, distance or angle, in the host's internal unit
    Unit(f64),
}

impl AttributeValue {
    /// Read as a double; ints, enums and units widen.
    pub fn as_double(&self) -> DiagResult<f64> {
        match *self {
            AttributeValue::Double(v) | AttributeValue::Unit(v) => Ok(v),
            AttributeValue::Int(v) => Ok(v as f64),
            AttributeValue::Enum(v) => Ok(f64::from(v)),
            AttributeValue::Bool(_) => Err(self.mismatch("double")),
        }
    }

    /// Read as an integer.
    pub fn as_int(&self) -> DiagResult<i64> {
        match *self {
            AttributeValue::Int(v) => Ok(v),
            AttributeValue::Enum(v) => Ok(i64::from(v)),
            _ => Err(self.mismatch("int")),
        }
    }

    /// Read as a bool.
    pub fn as_bool(&self) -> DiagResult<bool> {
        match *self {
            AttributeValue::Bool(v) => Ok(v),
            _ => Err(self.mismatch("bool")),
        }
    }

    fn mismatch(&self, wanted: &str) -> Diagnostic {
        Diagnostic::new(
            StatusCode::InvalidParameter,
            format!("cannot read {:?} as {}", self, wanted),
        )
    }
}

/// Numeric attribute data type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericType {
    Double,
    Float,
    Int,
    Bool,
}

/// Unit attribute data type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitType {
    Time,
    Distance,
    Angle,
}

/// Shape of an attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeKind {
    Numeric { ty: NumericType, default: f64 },
    Enum { fields: Vec<(String, i16)>, default: i16 },
    Unit { ty: UnitType, default: f64 },
    Compound { children: Vec<AttributeRef> },
}

/// Attribute to be added to a node type during initialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
    /// Long name
    pub attr: AttributeRef,
    /// Short name
    pub short_name: String,
    /// Data shape
    pub kind: AttributeKind,
}

impl AttributeDef {
    /// Numeric attribute.
    pub fn numeric(attr: AttributeRef, short_name: &str, ty: NumericType, default: f64) -> Self {
        Self {
            attr,
            short_name: short_name.to_string(),
            kind: AttributeKind::Numeric { ty, default },
        }
    }

    /// Enum attribute from `(field name, value)` pairs.
    pub fn enumeration(
        attr: AttributeRef,
        short_name: &str,
        fields: &[(&str, i16)],
        default: i16,
    ) -> Self {
        Self {
            attr,
            short_name: short_name.to_string(),
            kind: AttributeKind::Enum {
                fields: fields.iter().map(|(n, v)| (n.to_string(), *v)).collect(),
                default,
            },
        }
    }

    /// Unit attribute.
    pub fn unit(attr: AttributeRef, short_name: &str, ty: UnitType, default: f64) -> Self {
        Self {
            attr,
            short_name: short_name.to_string(),
            kind: AttributeKind::Unit { ty, default },
        }
    }

    /// Compound attribute grouping already-defined children.
    pub fn compound(attr: AttributeRef, short_name: &str, children: &[&AttributeRef]) -> Self {
        Self {
            attr,
            short_name: short_name.to_string(),
            kind: AttributeKind::Compound {
                children: children.iter().map(|c| (*c).clone()).collect(),
            },
        }
    }

    /// Value a fresh data block holds for this attribute; compounds hold none.
    pub fn default_value(&self) -> Option<AttributeValue> {
        match &self.kind {
            AttributeKind::Numeric { ty, default } => Some(match ty {
                NumericType::Double | NumericType::Float => AttributeValue::Double(*default),
                NumericType::Int => AttributeValue::Int(*default as i64),
                NumericType::Bool => AttributeValue::Bool(*default != 0.0),
            }),
            AttributeKind::Enum { default, .. } => Some(AttributeValue::Enum(*default)),
            AttributeKind::Unit { default, .. } => Some(AttributeValue::Unit(*default)),
            AttributeKind::Compound { .. } => None,
        }
    }
}
