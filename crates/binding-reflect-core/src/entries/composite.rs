//! Composite type entry.

use crate::{CompositeKind, TypeId, TypeIndex, TypeKind};

/// Registry entry for a type expressed in terms of another type.
///
/// Composite entries are never declared directly. The registry constructs
/// them the first time a declaration references their id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeEntry {
    pub index: TypeIndex,
    pub id: TypeId,
    /// Synthesized from the target (and param) names.
    pub name: String,
    pub kind: CompositeKind,
    /// Pointee or element type.
    pub target: TypeIndex,
    /// Optional secondary type.
    pub param: Option<TypeIndex>,
}

impl CompositeEntry {
    pub fn new(
        index: TypeIndex,
        id: TypeId,
        name: impl Into<String>,
        kind: CompositeKind,
        target: TypeIndex,
        param: Option<TypeIndex>,
    ) -> Self {
        Self {
            index,
            id,
            name: name.into(),
            kind,
            target,
            param,
        }
    }

    pub fn type_kind(&self) -> TypeKind {
        self.kind.type_kind()
    }

    /// Check if this entry points at a class (raw or shared).
    pub fn is_class_pointer(&self) -> bool {
        matches!(
            self.kind,
            CompositeKind::ClassPointer | CompositeKind::SharedClassPointer
        )
    }
}
