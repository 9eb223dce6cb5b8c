//! TypeEntry enum for unified arena storage.

use crate::{TypeId, TypeIndex, TypeKind};

use super::{ClassEntry, CompositeEntry, OpaqueEntry, PrimitiveEntry};

/// Unified descriptor stored in the registry arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntry {
    /// Fixed-size primitive.
    Primitive(PrimitiveEntry),
    /// Primitive declared with [`crate::PrimitiveFlags::BIG_INT`].
    BigInt(PrimitiveEntry),
    /// Opaque type.
    Opaque(OpaqueEntry),
    /// Class or global scope.
    Class(ClassEntry),
    /// Pointer, vector, array or C-string.
    Composite(CompositeEntry),
}

impl TypeEntry {
    /// Get the arena slot.
    pub fn index(&self) -> TypeIndex {
        match self {
            TypeEntry::Primitive(e) | TypeEntry::BigInt(e) => e.index,
            TypeEntry::Opaque(e) => e.index,
            TypeEntry::Class(e) => e.index,
            TypeEntry::Composite(e) => e.index,
        }
    }

    /// Get the source id. Only the global scope has none.
    pub fn id(&self) -> Option<TypeId> {
        match self {
            TypeEntry::Primitive(e) | TypeEntry::BigInt(e) => Some(e.id),
            TypeEntry::Opaque(e) => Some(e.id),
            TypeEntry::Class(e) => e.id,
            TypeEntry::Composite(e) => Some(e.id),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TypeEntry::Primitive(e) | TypeEntry::BigInt(e) => &e.name,
            TypeEntry::Opaque(e) => &e.name,
            TypeEntry::Class(e) => &e.name,
            TypeEntry::Composite(e) => &e.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeEntry::Primitive(_) => TypeKind::Primitive,
            TypeEntry::BigInt(_) => TypeKind::BigInt,
            TypeEntry::Opaque(_) => TypeKind::Other,
            TypeEntry::Class(_) => TypeKind::Class,
            TypeEntry::Composite(e) => e.type_kind(),
        }
    }

    // === Type Checks ===

    pub fn is_class(&self) -> bool {
        matches!(self, TypeEntry::Class(_))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, TypeEntry::Composite(_))
    }

    // === Downcasting ===

    pub fn as_primitive(&self) -> Option<&PrimitiveEntry> {
        match self {
            TypeEntry::Primitive(e) | TypeEntry::BigInt(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassEntry> {
        match self {
            TypeEntry::Class(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_class_mut(&mut self) -> Option<&mut ClassEntry> {
        match self {
            TypeEntry::Class(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeEntry> {
        match self {
            TypeEntry::Composite(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ClassEntry> for TypeEntry {
    fn from(entry: ClassEntry) -> Self {
        TypeEntry::Class(entry)
    }
}

impl From<OpaqueEntry> for TypeEntry {
    fn from(entry: OpaqueEntry) -> Self {
        TypeEntry::Opaque(entry)
    }
}

impl From<CompositeEntry> for TypeEntry {
    fn from(entry: CompositeEntry) -> Self {
        TypeEntry::Composite(entry)
    }
}
