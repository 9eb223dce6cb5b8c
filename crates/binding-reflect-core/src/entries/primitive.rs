//! Primitive and opaque type entries.

use crate::{PrimitiveFlags, TypeId, TypeIndex};

/// Registry entry for a primitive or big-integer type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveEntry {
    /// Arena slot.
    pub index: TypeIndex,
    /// Source id.
    pub id: TypeId,
    pub name: String,
    /// Storage size in bytes.
    pub size: u32,
    pub flags: PrimitiveFlags,
}

impl PrimitiveEntry {
    pub fn new(
        index: TypeIndex,
        id: TypeId,
        name: impl Into<String>,
        size: u32,
        flags: PrimitiveFlags,
    ) -> Self {
        Self {
            index,
            id,
            name: name.into(),
            size,
            flags,
        }
    }

    /// Create the reserved `void` entry.
    pub fn void(index: TypeIndex) -> Self {
        Self::new(index, TypeId::VOID, "void", 0, PrimitiveFlags::VOID)
    }
}

/// Registry entry for an opaque ("other") type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueEntry {
    pub index: TypeIndex,
    pub id: TypeId,
    pub name: String,
}

impl OpaqueEntry {
    pub fn new(index: TypeIndex, id: TypeId, name: impl Into<String>) -> Self {
        Self {
            index,
            id,
            name: name.into(),
        }
    }
}
