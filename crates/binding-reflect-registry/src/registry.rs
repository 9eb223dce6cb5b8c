//! TypeRegistry - arena of type descriptors.
//!
//! This module provides [`TypeRegistry`], the owner of every descriptor built
//! while reflecting a binding layer.
//!
//! # Storage Model
//!
//! - **Arena**: all entries live in one `Vec<TypeEntry>`; a [`TypeIndex`] is a
//!   slot in it and stays valid for the registry's lifetime.
//! - **By id**: source [`TypeId`] -> slot.
//! - **By name**: type name -> slot.
//!
//! Descriptors refer to each other by slot only, so self-referential graphs
//! (a class with a method returning a pointer to itself) need no shared
//! ownership.
//!
//! # Composite Types
//!
//! Pointers, vectors, arrays and C-strings are never declared up front. When
//! [`TypeRegistry::resolve`] misses on an id it asks a [`CompositeResolver`]
//! what the id denotes, resolves the target (and param) through the same path,
//! then constructs and registers the composite.
//!
//! # Example
//!
//! ```
//! use binding_reflect_core::{CompositeKind, CompositeQuery, PrimitiveDeclaration, TypeId};
//! use binding_reflect_registry::{TypeRegistry, TypeSpec};
//!
//! let mut registry = TypeRegistry::new();
//! let int = registry.construct(TypeSpec::Primitive(&PrimitiveDeclaration::new(1, "int32", 4)));
//!
//! let resolver = |id: TypeId| {
//!     (id == TypeId::new(20)).then(|| CompositeQuery::new(CompositeKind::Vector, TypeId::new(1)))
//! };
//! let vector = registry.resolve(TypeId::new(20), &resolver).unwrap();
//!
//! assert_eq!(registry.type_name(vector), "vector<int32>");
//! assert_eq!(registry.get_by_id(TypeId::new(1)), Some(int));
//! ```

use std::ops::Index;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use binding_reflect_core::{
    ClassDeclaration, ClassEntry, CompositeEntry, CompositeKind, OpaqueDeclaration, OpaqueEntry,
    PrimitiveDeclaration, PrimitiveEntry, ReflectError, TypeEntry, TypeId, TypeIndex,
};

use crate::CompositeResolver;

/// What to construct in [`TypeRegistry::construct`].
#[derive(Debug, Clone, Copy)]
pub enum TypeSpec<'a> {
    /// Primitive, or big integer when flagged.
    Primitive(&'a PrimitiveDeclaration),
    /// Opaque type.
    Opaque(&'a OpaqueDeclaration),
    /// Class.
    Class(&'a ClassDeclaration),
    /// Composite over already-resolved slots.
    Composite {
        id: TypeId,
        kind: CompositeKind,
        target: TypeIndex,
        param: Option<TypeIndex>,
    },
}

impl TypeSpec<'_> {
    /// Source id of the entry to construct.
    pub fn id(&self) -> TypeId {
        match self {
            TypeSpec::Primitive(decl) => decl.id,
            TypeSpec::Opaque(decl) => decl.id,
            TypeSpec::Class(decl) => decl.id,
            TypeSpec::Composite { id, .. } => *id,
        }
    }
}

/// Arena-backed type registry.
///
/// Not thread-safe; it is populated by a single ingestion pass and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    entries: Vec<TypeEntry>,
    by_id: FxHashMap<TypeId, TypeIndex>,
    by_name: FxHashMap<String, TypeIndex>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry holding only the reserved `void` entry at [`TypeId::VOID`].
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::new(),
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
        };
        let index = registry.next_index();
        registry.insert(TypeEntry::Primitive(PrimitiveEntry::void(index)), Some(TypeId::VOID));
        registry
    }

    // ==========================================================================
    // Construction
    // ==========================================================================

    /// Construct the entry described by `spec` and register it by id and name.
    ///
    /// The registry does not deduplicate: constructing the same id twice
    /// allocates a second entry and repoints both lookup tables at it. Callers
    /// check [`TypeRegistry::get_by_id`] first.
    pub fn construct(&mut self, spec: TypeSpec<'_>) -> TypeIndex {
        let index = self.next_index();
        let entry = match spec {
            TypeSpec::Primitive(decl) => {
                let entry =
                    PrimitiveEntry::new(index, decl.id, decl.name.clone(), decl.size, decl.flags);
                if decl.flags.is_big_int() {
                    TypeEntry::BigInt(entry)
                } else {
                    TypeEntry::Primitive(entry)
                }
            }
            TypeSpec::Opaque(decl) => OpaqueEntry::new(index, decl.id, decl.name.clone()).into(),
            TypeSpec::Class(decl) => {
                ClassEntry::new(index, Some(decl.id), decl.name.clone()).into()
            }
            TypeSpec::Composite {
                id,
                kind,
                target,
                param,
            } => {
                let name = kind.type_name(
                    self.type_name(target),
                    param.map(|param| self.type_name(param)),
                );
                CompositeEntry::new(index, id, name, kind, target, param).into()
            }
        };
        self.insert(entry, Some(spec.id()))
    }

    /// Allocate a class entry that is reachable by slot only.
    ///
    /// Used for the synthetic global scope, which has no source id and must not
    /// shadow a declared type of the same name.
    pub fn construct_scope(&mut self, name: impl Into<String>) -> TypeIndex {
        let index = self.next_index();
        self.insert(ClassEntry::new(index, None, name).into(), None)
    }

    fn next_index(&self) -> TypeIndex {
        TypeIndex::new(self.entries.len() as u32)
    }

    fn insert(&mut self, entry: TypeEntry, id: Option<TypeId>) -> TypeIndex {
        let index = entry.index();
        if let Some(id) = id {
            self.by_id.insert(id, index);
            self.by_name.insert(entry.name().to_string(), index);
        }
        self.entries.push(entry);
        index
    }

    // ==========================================================================
    // Resolution
    // ==========================================================================

    /// Resolve an id to a slot, constructing composites on demand.
    ///
    /// Fails with [`ReflectError::UnresolvedType`] when neither the registry
    /// nor the resolver knows the id, and with [`ReflectError::CompositeCycle`]
    /// when a composite's target chain leads back to itself.
    pub fn resolve<R>(&mut self, id: TypeId, resolver: &R) -> Result<TypeIndex, ReflectError>
    where
        R: CompositeResolver + ?Sized,
    {
        let mut visiting = FxHashSet::default();
        self.resolve_in(id, resolver, &mut visiting)
    }

    /// Query the resolver for `id` and construct the composite it describes.
    ///
    /// Unlike [`TypeRegistry::resolve`] this does not look `id` up first.
    pub fn resolve_composite<R>(
        &mut self,
        id: TypeId,
        resolver: &R,
    ) -> Result<TypeIndex, ReflectError>
    where
        R: CompositeResolver + ?Sized,
    {
        let mut visiting = FxHashSet::default();
        self.resolve_composite_in(id, resolver, &mut visiting)
    }

    fn resolve_in<R>(
        &mut self,
        id: TypeId,
        resolver: &R,
        visiting: &mut FxHashSet<TypeId>,
    ) -> Result<TypeIndex, ReflectError>
    where
        R: CompositeResolver + ?Sized,
    {
        match self.get_by_id(id) {
            Some(index) => Ok(index),
            None => self.resolve_composite_in(id, resolver, visiting),
        }
    }

    fn resolve_composite_in<R>(
        &mut self,
        id: TypeId,
        resolver: &R,
        visiting: &mut FxHashSet<TypeId>,
    ) -> Result<TypeIndex, ReflectError>
    where
        R: CompositeResolver + ?Sized,
    {
        if !visiting.insert(id) {
            return Err(ReflectError::CompositeCycle { id });
        }
        let query = resolver
            .query_composite(id)
            .ok_or(ReflectError::UnresolvedType { id })?;

        let target = self.resolve_in(query.target, resolver, visiting)?;
        let param = query
            .param
            .map(|param| self.resolve_in(param, resolver, visiting))
            .transpose()?;
        visiting.remove(&id);

        let index = self.construct(TypeSpec::Composite {
            id,
            kind: query.kind,
            target,
            param,
        });
        trace!(%id, name = self.type_name(index), "resolved composite type");
        Ok(index)
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get the slot registered for a source id.
    pub fn get_by_id(&self, id: TypeId) -> Option<TypeIndex> {
        self.by_id.get(&id).copied()
    }

    /// Get the slot registered for a type name.
    pub fn get_by_name(&self, name: &str) -> Option<TypeIndex> {
        self.by_name.get(name).copied()
    }

    /// Get the entry registered for a source id.
    pub fn entry_by_id(&self, id: TypeId) -> Option<&TypeEntry> {
        self.get_by_id(id).map(|index| &self[index])
    }

    /// Check if a source id is registered.
    pub fn contains_id(&self, id: TypeId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Get an entry by slot.
    pub fn get(&self, index: TypeIndex) -> Option<&TypeEntry> {
        self.entries.get(index.slot())
    }

    /// Get a mutable entry by slot.
    pub fn get_mut(&mut self, index: TypeIndex) -> Option<&mut TypeEntry> {
        self.entries.get_mut(index.slot())
    }

    /// Get a class entry by slot. Returns `None` for non-class entries.
    pub fn class(&self, index: TypeIndex) -> Option<&ClassEntry> {
        self.get(index).and_then(TypeEntry::as_class)
    }

    /// Get a mutable class entry by slot.
    pub fn class_mut(&mut self, index: TypeIndex) -> Option<&mut ClassEntry> {
        self.get_mut(index).and_then(TypeEntry::as_class_mut)
    }

    /// Get the name of the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not handed out by this registry.
    pub fn type_name(&self, index: TypeIndex) -> &str {
        self[index].name()
    }

    // ==========================================================================
    // Iteration
    // ==========================================================================

    /// Iterate over all entries in construction order.
    pub fn entries(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.iter()
    }

    /// Iterate over all class entries, including the global scope.
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.entries.iter().filter_map(TypeEntry::as_class)
    }

    /// Number of entries, including the reserved `void`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: `void` is pre-registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<TypeIndex> for TypeRegistry {
    type Output = TypeEntry;

    fn index(&self, index: TypeIndex) -> &TypeEntry {
        &self.entries[index.slot()]
    }
}
