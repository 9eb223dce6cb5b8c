//! Identifier types for declared types and arena slots.
//!
//! Two identifiers exist side by side:
//!
//! - [`TypeId`] is the numeric handle assigned by the binding layer. It is only
//!   meaningful to that layer and is used to look entries up.
//! - [`TypeIndex`] is the stable slot of an entry inside one registry arena.
//!   All references between descriptors go through it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric type handle assigned by the declaration source.
///
/// # Example
///
/// ```
/// use binding_reflect_core::TypeId;
///
/// let id = TypeId::new(10);
/// assert_eq!(id.raw(), 10);
/// assert_eq!(id.to_string(), "#10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Reserved handle for `void`, pre-registered by every registry.
    pub const VOID: TypeId = TypeId(0);

    /// Create a type id from its raw value.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for TypeId {
    fn from(raw: u32) -> Self {
        Self::new(raw)
    }
}

impl From<TypeId> for u32 {
    fn from(id: TypeId) -> Self {
        id.0
    }
}

/// Stable slot of a descriptor inside a registry arena.
///
/// Indices are handed out in construction order and never reused, so an index
/// obtained once stays valid for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeIndex(u32);

impl TypeIndex {
    /// Create an index from a slot position.
    #[inline]
    pub const fn new(slot: u32) -> Self {
        Self(slot)
    }

    /// Get the slot position as `usize` for arena access.
    #[inline]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot_{}", self.0)
    }
}
