//! ReflectionBuilder - turns a declaration stream into a [`ReflectionModel`].
//!
//! The builder is the [`DeclarationSink`] handed to a binding layer. It
//! constructs descriptors in a [`TypeRegistry`], resolves member type lists
//! (building composites on demand), and attaches free functions to the
//! synthetic global scope.
//!
//! # Build Phases
//!
//! 1. **Ingestion**: one handler call per declaration, in the layer's order.
//!    Primitive, opaque and class declarations are registered immediately;
//!    member declarations are queued, since the stream may name types it
//!    declares later.
//! 2. **Members**: [`ReflectionBuilder::finish`] replays the queued members
//!    in stream order against the complete set of declared types. Owners and
//!    type lists are resolved here. Any error aborts the build.
//! 3. **Finalization**: the listed classes and the global scope's methods are
//!    sorted by name. Nothing else is reordered.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use binding_reflect_core::{
    ClassDeclaration, MemberDeclaration, OpaqueDeclaration, PrimitiveDeclaration, ReflectError,
    SignatureKind, TypeEntry, TypeId, TypeIndex,
};
use binding_reflect_registry::{CompositeResolver, TypeRegistry, TypeSpec};

use crate::{BindingLayer, DeclarationSink, ReflectConfig, ReflectionModel};

/// Counters collected while building a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub primitives: usize,
    pub big_ints: usize,
    pub opaque_types: usize,
    /// Declared classes, including excluded ones.
    pub classes: usize,
    pub excluded_classes: usize,
    /// Composites constructed through the query callback.
    pub composites: usize,
    /// Methods, constructors and free functions.
    pub methods: usize,
    pub properties: usize,
    /// Members with a signature kind the model does not know.
    pub ignored_members: usize,
    /// Type declarations skipped because their id was already registered.
    pub duplicate_declarations: usize,
}

/// The synthetic global scope and the source id that introduced it.
#[derive(Debug, Clone, Copy)]
struct GlobalScope {
    index: TypeIndex,
    /// Free functions keep arriving under this class id.
    alias: TypeId,
}

/// Incremental model builder.
pub struct ReflectionBuilder<'r, R: CompositeResolver + ?Sized> {
    config: ReflectConfig,
    resolver: &'r R,
    registry: TypeRegistry,
    classes: Vec<TypeIndex>,
    global: Option<GlobalScope>,
    /// Member declarations waiting for every type to be declared.
    pending: Vec<MemberDeclaration>,
    stats: BuildStats,
}

impl<'r, R: CompositeResolver + ?Sized> ReflectionBuilder<'r, R> {
    /// Create a builder with an empty registry.
    pub fn new(config: ReflectConfig, resolver: &'r R) -> Self {
        Self {
            config,
            resolver,
            registry: TypeRegistry::new(),
            classes: Vec::new(),
            global: None,
            pending: Vec::new(),
            stats: BuildStats::default(),
        }
    }

    /// The registry built so far.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Slot of the global scope, if one has been created.
    pub fn global_scope(&self) -> Option<TypeIndex> {
        self.global.map(|scope| scope.index)
    }

    /// Create the global scope, bound to the class id free functions use.
    ///
    /// Returns the existing scope if one was already created.
    pub fn ensure_global_scope(&mut self, alias: TypeId) -> TypeIndex {
        if let Some(scope) = self.global {
            return scope.index;
        }
        let index = self.registry.construct_scope(self.config.global_scope_name.clone());
        debug!(%alias, name = %self.config.global_scope_name, "created global scope");
        self.global = Some(GlobalScope { index, alias });
        index
    }

    /// Number of member declarations queued for [`ReflectionBuilder::finish`].
    pub fn pending_members(&self) -> usize {
        self.pending.len()
    }

    /// Reflect the queued members, then sort and seal the model.
    ///
    /// Fails on the first member whose owner or types cannot be resolved;
    /// nothing built so far survives.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn finish(mut self) -> Result<ReflectionModel, ReflectError> {
        let pending = std::mem::take(&mut self.pending);
        debug!(members = pending.len(), "reflecting queued members");
        for decl in &pending {
            self.reflect_member(decl)?;
        }

        let registry = &self.registry;
        self.classes
            .sort_by(|&a, &b| registry.type_name(a).cmp(registry.type_name(b)));

        if let Some(scope) = self.global {
            if let Some(global) = self.registry.class_mut(scope.index) {
                global.sort_methods_by_name();
            }
        }

        self.stats.composites = self
            .registry
            .entries()
            .filter(|entry| entry.is_composite())
            .count();
        self.stats.properties = self
            .registry
            .classes()
            .map(|class| class.property_count())
            .sum();

        debug!(stats = ?self.stats, "reflection model built");
        Ok(ReflectionModel::new(
            self.registry,
            self.classes,
            self.global.map(|scope| scope.index),
            self.stats,
            self.config.render,
        ))
    }

    /// Find the class a member belongs to, creating the global scope for the
    /// first unknown class id.
    fn owner_for(&mut self, decl: &MemberDeclaration) -> Result<TypeIndex, ReflectError> {
        if let Some(index) = self
            .registry
            .get_by_id(decl.class_id)
            .filter(|&index| self.registry.class(index).is_some())
        {
            return Ok(index);
        }
        match self.global {
            None => Ok(self.ensure_global_scope(decl.class_id)),
            Some(scope) if scope.alias == decl.class_id => Ok(scope.index),
            Some(_) => Err(ReflectError::UnknownClass {
                class_id: decl.class_id,
                member: decl.name.clone(),
            }),
        }
    }

    /// Skip type declarations whose id is already registered.
    fn is_duplicate(&mut self, id: TypeId, name: &str) -> bool {
        if self.registry.contains_id(id) {
            warn!(%id, name, "type id declared twice, keeping the first declaration");
            self.stats.duplicate_declarations += 1;
            return true;
        }
        false
    }
}

impl<R: CompositeResolver + ?Sized> DeclarationSink for ReflectionBuilder<'_, R> {
    fn declare_primitive(&mut self, decl: &PrimitiveDeclaration) -> Result<(), ReflectError> {
        if self.is_duplicate(decl.id, &decl.name) {
            return Ok(());
        }
        let index = self.registry.construct(TypeSpec::Primitive(decl));
        match self.registry[index] {
            TypeEntry::BigInt(_) => self.stats.big_ints += 1,
            _ => self.stats.primitives += 1,
        }
        trace!(id = %decl.id, name = %decl.name, size = decl.size, "primitive");
        Ok(())
    }

    fn declare_opaque(&mut self, decl: &OpaqueDeclaration) -> Result<(), ReflectError> {
        if self.is_duplicate(decl.id, &decl.name) {
            return Ok(());
        }
        self.registry.construct(TypeSpec::Opaque(decl));
        self.stats.opaque_types += 1;
        trace!(id = %decl.id, name = %decl.name, "opaque type");
        Ok(())
    }

    fn declare_class(&mut self, decl: &ClassDeclaration) -> Result<(), ReflectError> {
        if self.is_duplicate(decl.id, &decl.name) {
            return Ok(());
        }
        let index = self.registry.construct(TypeSpec::Class(decl));
        self.stats.classes += 1;
        if self.config.is_excluded(&decl.name) {
            self.stats.excluded_classes += 1;
            trace!(id = %decl.id, name = %decl.name, "excluded class");
        } else {
            self.classes.push(index);
            trace!(id = %decl.id, name = %decl.name, "class");
        }
        Ok(())
    }

    fn declare_member(&mut self, decl: &MemberDeclaration) -> Result<(), ReflectError> {
        if let SignatureKind::Unknown(code) = decl.kind {
            debug!(
                class_id = %decl.class_id,
                name = %decl.name,
                code,
                "ignoring member of unknown kind"
            );
            self.stats.ignored_members += 1;
            return Ok(());
        }

        trace!(class_id = %decl.class_id, name = %decl.name, "queued member");
        self.pending.push(decl.clone());
        Ok(())
    }
}

impl<R: CompositeResolver + ?Sized> ReflectionBuilder<'_, R> {
    /// Attach one queued member to its owner.
    fn reflect_member(&mut self, decl: &MemberDeclaration) -> Result<(), ReflectError> {
        let owner = self.owner_for(decl)?;
        let types = decl
            .types
            .iter()
            .map(|&id| self.registry.resolve(id, self.resolver))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| err.while_reflecting(self.member_context(owner, decl)))?;

        let naming = Arc::clone(&self.config.accessor_naming);
        let Some(class) = self.registry.class_mut(owner) else {
            return Err(ReflectError::UnknownClass {
                class_id: decl.class_id,
                member: decl.name.clone(),
            });
        };

        if decl.kind.is_method() {
            class.add_method(&decl.name, decl.kind, &types, &decl.policies);
            self.stats.methods += 1;
        } else {
            class.add_property(naming.as_ref(), &decl.name, decl.kind, &types, &decl.policies);
        }
        trace!(class = %class.name, name = %decl.name, kind = ?decl.kind, "member");
        Ok(())
    }

    fn member_context(&self, owner: TypeIndex, decl: &MemberDeclaration) -> String {
        let member = if decl.name.is_empty() {
            "<constructor>"
        } else {
            decl.name.as_str()
        };
        format!("{}.{}", self.registry.type_name(owner), member)
    }
}

/// Build a model from a binding layer with the default configuration.
pub fn build_model<B>(binding: &B) -> Result<ReflectionModel, ReflectError>
where
    B: BindingLayer + ?Sized,
{
    build_model_with(binding, ReflectConfig::default())
}

/// Build a model from a binding layer.
///
/// The layer's handle type, if any, joins the excluded class names. On error
/// nothing built so far survives.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn build_model_with<B>(
    binding: &B,
    mut config: ReflectConfig,
) -> Result<ReflectionModel, ReflectError>
where
    B: BindingLayer + ?Sized,
{
    if let Some(handle) = binding.handle_type_name() {
        config.excluded_classes.insert(handle.to_string());
    }
    debug!("building reflection model");
    let mut builder = ReflectionBuilder::new(config, binding);
    binding.subscribe(&mut builder)?;
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use binding_reflect_core::{CompositeKind, CompositeQuery};
    use binding_reflect_registry::NoComposites;

    fn builder(resolver: &NoComposites) -> ReflectionBuilder<'_, NoComposites> {
        ReflectionBuilder::new(ReflectConfig::default(), resolver)
    }

    #[test]
    fn primitive_and_big_int_counted() {
        let mut b = builder(&NoComposites);
        b.declare_primitive(&PrimitiveDeclaration::new(1, "int32", 4)).unwrap();
        b.declare_primitive(
            &PrimitiveDeclaration::new(2, "int64", 8)
                .with_flags(binding_reflect_core::PrimitiveFlags::BIG_INT),
        )
        .unwrap();
        let model = b.finish().unwrap();
        assert_eq!(model.stats().primitives, 1);
        assert_eq!(model.stats().big_ints, 1);
    }

    #[test]
    fn duplicate_class_ignored() {
        let mut b = builder(&NoComposites);
        b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
        let first = b.registry().get_by_id(TypeId::new(10));
        b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
        assert_eq!(b.registry().get_by_id(TypeId::new(10)), first);

        let model = b.finish().unwrap();
        assert_eq!(model.classes().count(), 1);
        assert_eq!(model.stats().duplicate_declarations, 1);
    }

    #[test]
    fn excluded_class_registered_not_listed() {
        let mut b = builder(&NoComposites);
        b.declare_class(&ClassDeclaration::new(5, "Handle")).unwrap();
        assert!(b.registry().get_by_name("Handle").is_some());
        let model = b.finish().unwrap();
        assert_eq!(model.classes().count(), 0);
        assert_eq!(model.stats().excluded_classes, 1);
    }

    #[test]
    fn global_scope_created_once() {
        let mut b = builder(&NoComposites);
        assert_eq!(b.global_scope(), None);
        let first = b.ensure_global_scope(TypeId::new(99));
        let second = b.ensure_global_scope(TypeId::new(98));
        assert_eq!(first, second);
        assert_eq!(b.global_scope(), Some(first));
    }

    #[test]
    fn free_functions_share_alias_id() {
        let mut b = builder(&NoComposites);
        b.declare_member(&MemberDeclaration::new(99, "b", SignatureKind::Function, [0]))
            .unwrap();
        b.declare_member(&MemberDeclaration::new(99, "a", SignatureKind::Function, [0]))
            .unwrap();
        b.declare_member(&MemberDeclaration::new(7, "spin", SignatureKind::Method, [0]))
            .unwrap();
        let err = b.finish().unwrap_err();
        assert_eq!(
            err,
            ReflectError::UnknownClass {
                class_id: TypeId::new(7),
                member: "spin".to_string()
            }
        );
    }

    #[test]
    fn unknown_kind_is_ignored_before_resolution() {
        let mut b = builder(&NoComposites);
        b.declare_member(&MemberDeclaration::new(99, "x", SignatureKind::Unknown(12), [404]))
            .unwrap();
        assert_eq!(b.global_scope(), None);
        assert_eq!(b.pending_members(), 0);
        assert_eq!(b.finish().unwrap().stats().ignored_members, 1);
    }

    #[test]
    fn unresolved_type_carries_context() {
        let mut b = builder(&NoComposites);
        b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
        b.declare_member(&MemberDeclaration::new(10, "resize", SignatureKind::Method, [0, 404]))
            .unwrap();
        let err = b.finish().unwrap_err();
        assert_eq!(err.to_string(), "unresolved type #404 while reflecting Widget.resize");
        assert!(err.is_unresolved_type());
    }

    #[test]
    fn constructor_context_is_named() {
        let mut b = builder(&NoComposites);
        b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
        b.declare_member(&MemberDeclaration::new(10, "", SignatureKind::Constructor, [10, 404]))
            .unwrap();
        let err = b.finish().unwrap_err();
        assert!(err.to_string().ends_with("while reflecting Widget.<constructor>"));
    }

    #[test]
    fn composites_resolved_through_resolver() {
        let resolver = |id: TypeId| {
            (id.raw() == 20)
                .then(|| CompositeQuery::new(CompositeKind::ClassPointer, TypeId::new(10)))
        };
        let mut b = ReflectionBuilder::new(ReflectConfig::default(), &resolver);
        b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
        b.declare_member(&MemberDeclaration::new(10, "parent", SignatureKind::Method, [20]))
            .unwrap();
        let model = b.finish().unwrap();
        assert_eq!(model.stats().composites, 1);
        let widget = model.class("Widget").unwrap();
        let ret = widget.method("parent").unwrap().return_type.unwrap();
        assert_eq!(model.type_name(ret), "Widget*");
    }

    #[test]
    fn members_wait_for_later_declarations() {
        let mut b = builder(&NoComposites);
        b.declare_member(&MemberDeclaration::new(10, "draw", SignatureKind::Method, [0]))
            .unwrap();
        b.declare_member(&MemberDeclaration::new(10, "attach", SignatureKind::Method, [0, 11]))
            .unwrap();
        assert_eq!(b.pending_members(), 2);
        assert_eq!(b.global_scope(), None);

        b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
        b.declare_class(&ClassDeclaration::new(11, "Panel")).unwrap();
        let model = b.finish().unwrap();

        assert!(model.global_scope().is_none());
        let widget = model.class("Widget").unwrap();
        assert_eq!(widget.method_count(), 2);
        let attach = widget.method("attach").unwrap();
        assert_eq!(model.type_name(attach.args[0]), "Panel");
    }
}
