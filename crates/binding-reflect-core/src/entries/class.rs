//! Class type entry.
//!
//! This module provides `ClassEntry`, which accumulates the methods and
//! properties announced for one class. The synthetic global scope is a
//! `ClassEntry` without a source id.

use rustc_hash::FxHashMap;

use crate::{AccessorNaming, SignatureKind, TypeId, TypeIndex};

use super::{MethodEntry, PropertyEntry};

/// Registry entry for a class.
///
/// Methods are kept in one declaration-ordered list. A name index maps each
/// method name to the positions of all its overloads, so both "every overload
/// of `f`" and "the latest `f`" are explicit queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    /// Arena slot.
    pub index: TypeIndex,
    /// Source id; `None` for the global scope.
    pub id: Option<TypeId>,
    pub name: String,

    methods: Vec<MethodEntry>,
    methods_by_name: FxHashMap<String, Vec<usize>>,
    properties: Vec<PropertyEntry>,
    properties_by_name: FxHashMap<String, usize>,
}

impl ClassEntry {
    /// Create an empty class entry.
    pub fn new(index: TypeIndex, id: Option<TypeId>, name: impl Into<String>) -> Self {
        Self {
            index,
            id,
            name: name.into(),
            methods: Vec::new(),
            methods_by_name: FxHashMap::default(),
            properties: Vec::new(),
            properties_by_name: FxHashMap::default(),
        }
    }

    /// Check if this is the synthetic global scope.
    pub fn is_global(&self) -> bool {
        self.id.is_none()
    }

    // === Accumulation ===

    /// Add a constructor, free function or method.
    ///
    /// `types[0]` is the return type and the rest are arguments. Overloads of
    /// the same name accumulate; [`ClassEntry::method`] returns the latest.
    pub fn add_method(
        &mut self,
        name: &str,
        kind: SignatureKind,
        types: &[TypeIndex],
        policies: &[String],
    ) -> &MethodEntry {
        let position = self.methods.len();
        self.methods
            .push(MethodEntry::new(self.index, name, kind, types, policies));
        self.methods_by_name
            .entry(name.to_string())
            .or_default()
            .push(position);
        &self.methods[position]
    }

    /// Merge a getter or setter into the property it belongs to.
    ///
    /// The property name comes from `naming`. Declarations of any other kind
    /// leave the class untouched and return `None`.
    pub fn add_property(
        &mut self,
        naming: &dyn AccessorNaming,
        declared: &str,
        kind: SignatureKind,
        types: &[TypeIndex],
        policies: &[String],
    ) -> Option<&PropertyEntry> {
        if !kind.is_accessor() {
            return None;
        }
        let name = naming.property_name(declared, kind);
        let position = match self.properties_by_name.get(name) {
            Some(&position) => position,
            None => {
                let position = self.properties.len();
                self.properties.push(PropertyEntry::new(self.index, name));
                self.properties_by_name.insert(name.to_string(), position);
                position
            }
        };

        let property = &mut self.properties[position];
        match kind {
            SignatureKind::Getter => property.apply_getter(types, policies),
            _ => property.apply_setter(types, policies),
        }
        Some(&self.properties[position])
    }

    /// Sort methods by name, keeping overloads in declaration order.
    pub fn sort_methods_by_name(&mut self) {
        self.methods.sort_by(|a, b| a.name.cmp(&b.name));
        self.methods_by_name.clear();
        for (position, method) in self.methods.iter().enumerate() {
            self.methods_by_name
                .entry(method.name.clone())
                .or_default()
                .push(position);
        }
    }

    // === Query Methods ===

    /// All methods in order.
    pub fn methods(&self) -> &[MethodEntry] {
        &self.methods
    }

    /// All properties in first-declared order.
    pub fn properties(&self) -> &[PropertyEntry] {
        &self.properties
    }

    /// The most recently declared method with this name.
    pub fn method(&self, name: &str) -> Option<&MethodEntry> {
        self.methods_by_name
            .get(name)
            .and_then(|positions| positions.last())
            .map(|&position| &self.methods[position])
    }

    /// Every overload with this name, in declaration order.
    pub fn methods_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a MethodEntry> + 'a {
        self.methods_by_name
            .get(name)
            .into_iter()
            .flatten()
            .map(move |&position| &self.methods[position])
    }

    /// Constructors in declaration order.
    pub fn constructors(&self) -> impl Iterator<Item = &MethodEntry> {
        self.methods.iter().filter(|m| m.is_constructor())
    }

    /// Find a property by normalized name.
    pub fn property(&self, name: &str) -> Option<&PropertyEntry> {
        self.properties_by_name
            .get(name)
            .map(|&position| &self.properties[position])
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Check if the class has no members.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.properties.is_empty()
    }
}
