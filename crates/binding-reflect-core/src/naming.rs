//! Accessor naming policies.
//!
//! The binding layer announces property accessors as individually named
//! members (`get_size`, `set_size`). The class model folds them into one
//! property, and the policy decides which property name a declared accessor
//! name belongs to.

use std::fmt::Debug;

use crate::SignatureKind;

/// Maps a declared accessor name to its property name.
pub trait AccessorNaming: Debug + Send + Sync {
    /// Get the property name for an accessor of `kind` declared as `declared`.
    fn property_name<'a>(&self, declared: &'a str, kind: SignatureKind) -> &'a str;
}

/// Strips a getter or setter prefix when present.
///
/// ```
/// use binding_reflect_core::{AccessorNaming, PrefixAccessorNaming, SignatureKind};
///
/// let naming = PrefixAccessorNaming::default();
/// assert_eq!(naming.property_name("get_size", SignatureKind::Getter), "size");
/// assert_eq!(naming.property_name("set_size", SignatureKind::Setter), "size");
/// assert_eq!(naming.property_name("size", SignatureKind::Getter), "size");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixAccessorNaming {
    getter_prefix: String,
    setter_prefix: String,
}

impl PrefixAccessorNaming {
    pub fn new(getter_prefix: impl Into<String>, setter_prefix: impl Into<String>) -> Self {
        Self {
            getter_prefix: getter_prefix.into(),
            setter_prefix: setter_prefix.into(),
        }
    }
}

impl Default for PrefixAccessorNaming {
    fn default() -> Self {
        Self::new("get_", "set_")
    }
}

impl AccessorNaming for PrefixAccessorNaming {
    fn property_name<'a>(&self, declared: &'a str, kind: SignatureKind) -> &'a str {
        let prefix = match kind {
            SignatureKind::Getter => &self.getter_prefix,
            SignatureKind::Setter => &self.setter_prefix,
            _ => return declared,
        };
        match declared.strip_prefix(prefix.as_str()) {
            // A bare prefix would collapse to an empty property name.
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => declared,
        }
    }
}

/// Uses declared accessor names unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityAccessorNaming;

impl AccessorNaming for IdentityAccessorNaming {
    fn property_name<'a>(&self, declared: &'a str, _kind: SignatureKind) -> &'a str {
        declared
    }
}
