//! The finished, read-only reflection model.

use std::fmt;

use binding_reflect_core::{ClassEntry, TypeEntry, TypeIndex};
use binding_reflect_registry::TypeRegistry;

use crate::{BuildStats, PseudoInterface, RenderOptions};

/// Typed object model of a binding layer's public surface.
///
/// Built once by [`crate::build_model`] and immutable afterwards, so it can be
/// shared freely between readers.
#[derive(Debug, Clone)]
pub struct ReflectionModel {
    registry: TypeRegistry,
    classes: Vec<TypeIndex>,
    global: Option<TypeIndex>,
    stats: BuildStats,
    render: RenderOptions,
}

impl ReflectionModel {
    pub(crate) fn new(
        registry: TypeRegistry,
        classes: Vec<TypeIndex>,
        global: Option<TypeIndex>,
        stats: BuildStats,
        render: RenderOptions,
    ) -> Self {
        Self {
            registry,
            classes,
            global,
            stats,
            render,
        }
    }

    /// The registry owning every descriptor.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Listed classes, sorted by name. Excluded classes are not included.
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes
            .iter()
            .filter_map(|&index| self.registry.class(index))
    }

    /// Slots of the listed classes, sorted by name.
    pub fn class_indices(&self) -> &[TypeIndex] {
        &self.classes
    }

    /// Find a listed class by name.
    pub fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes().find(|class| class.name == name)
    }

    /// The global scope holding free functions, if any were declared.
    pub fn global_scope(&self) -> Option<&ClassEntry> {
        self.global.and_then(|index| self.registry.class(index))
    }

    /// Name of the type at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this model. Use
    /// [`ReflectionModel::get_type_name`] for indices of unknown origin.
    pub fn type_name(&self, index: TypeIndex) -> &str {
        self.registry.type_name(index)
    }

    /// Name of the type at `index`, or `None` if this model has no such slot.
    pub fn get_type_name(&self, index: TypeIndex) -> Option<&str> {
        self.registry.get(index).map(TypeEntry::name)
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Render the pseudo-interface with the configured options.
    pub fn render_pseudo_interface(&self) -> String {
        self.render_with(&self.render)
    }

    /// Render the pseudo-interface with explicit options.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn render_with(&self, options: &RenderOptions) -> String {
        PseudoInterface::new(self, options).to_string()
    }
}

impl fmt::Display for ReflectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&PseudoInterface::new(self, &self.render), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeclarationSink, ReflectConfig, ReflectionBuilder};
    use binding_reflect_core::ClassDeclaration;
    use binding_reflect_registry::NoComposites;

    fn widget_model() -> ReflectionModel {
        let mut builder = ReflectionBuilder::new(ReflectConfig::default(), &NoComposites);
        builder
            .declare_class(&ClassDeclaration::new(10, "Widget"))
            .unwrap();
        builder.finish().unwrap()
    }

    #[test]
    fn get_type_name_rejects_foreign_index() {
        let model = widget_model();
        let widget = model.class("Widget").unwrap().index;
        assert_eq!(model.get_type_name(widget), Some("Widget"));
        assert_eq!(model.get_type_name(TypeIndex::new(10_000)), None);
    }

    #[test]
    #[should_panic]
    fn type_name_panics_on_foreign_index() {
        let model = widget_model();
        model.type_name(TypeIndex::new(10_000));
    }
}
