//! Attribute option bundles and the attribute-creation wrapper.

use crate::attribute::definition::{AttributeDef, AttributeRef};
use crate::host::AttributeHost;
use crate::status::{throw_if, DiagResult};
use serde::{Deserialize, Serialize};

/// A single attribute option flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeFlag {
    Readable,
    Writable,
    Storable,
    Keyable,
    Cached,
}

impl AttributeFlag {
    /// Every flag, in the order they are applied.
    pub const ALL: [AttributeFlag; 5] = [
        AttributeFlag::Readable,
        AttributeFlag::Writable,
        AttributeFlag::Storable,
        AttributeFlag::Keyable,
        AttributeFlag::Cached,
    ];
}

impl std::fmt::Display for AttributeFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeFlag::Readable => write!(f, "readable"),
            AttributeFlag::Writable => write!(f, "writable"),
            AttributeFlag::Storable => write!(f, "storable"),
            AttributeFlag::Keyable => write!(f, "keyable"),
            AttributeFlag::Cached => write!(f, "cached"),
        }
    }
}

/// The five option flags of an attribute, applied in one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeOptions {
    pub readable: bool,
    pub writable: bool,
    pub storable: bool,
    pub keyable: bool,
    pub cached: bool,
}

impl Default for AttributeOptions {
    fn default() -> Self {
        Self {
            readable: true,
            writable: true,
            storable: true,
            keyable: true,
            cached: true,
        }
    }
}

impl AttributeOptions {
    /// Options for a computed output: readable and cached only.
    pub fn output() -> Self {
        Self {
            readable: true,
            writable: false,
            storable: false,
            keyable: false,
            cached: true,
        }
    }

    /// Options for a driving input that should not be saved or keyed.
    pub fn transient_input() -> Self {
        Self {
            readable: false,
            writable: true,
            storable: false,
            keyable: false,
            cached: false,
        }
    }

    /// Value of one flag.
    pub fn get(&self, flag: AttributeFlag) -> bool {
        match flag {
            AttributeFlag::Readable => self.readable,
            AttributeFlag::Writable => self.writable,
            AttributeFlag::Storable => self.storable,
            AttributeFlag::Keyable => self.keyable,
            AttributeFlag::Cached => self.cached,
        }
    }

    /// Apply every flag to `attr`, stopping at the first one the host
    /// rejects.
    pub fn apply(&self, host: &mut dyn AttributeHost, attr: &AttributeRef) -> DiagResult<()> {
        for flag in AttributeFlag::ALL {
            let value = self.get(flag);
            throw_if(
                host.set_attribute_flag(attr, flag, value),
                format!("failed to set {} = {} on attribute {}", flag, value, attr),
            )?;
        }
        Ok(())
    }
}

/// Add an attribute to the node type being initialized.
pub fn add_attribute(host: &mut dyn AttributeHost, def: &AttributeDef) -> DiagResult<()> {
    throw_if(
        host.add_attribute(def),
        format!("failed to add attribute {} ({})", def.attr, def.short_name),
    )
}

/// Apply `options` to the attribute, then add it.
pub fn add_attribute_with(
    host: &mut dyn AttributeHost,
    def: &AttributeDef,
    options: &AttributeOptions,
) -> DiagResult<()> {
    options.apply(host, &def.attr)?;
    add_attribute(host, def)
}
