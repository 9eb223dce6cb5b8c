//! Builder and renderer configuration.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use binding_reflect_core::{AccessorNaming, PrefixAccessorNaming};

use crate::RenderOptions;

/// Class names that are never listed as ordinary classes.
///
/// `Handle` is the identity value type; the double-underscore names are the
/// binding layer's own bookkeeping classes.
pub const DEFAULT_EXCLUDED_CLASSES: &[&str] = &["Handle", "__BindingRegistry", "__ClassHandle"];

/// Name given to the synthetic scope holding free functions.
pub const DEFAULT_GLOBAL_SCOPE_NAME: &str = "global";

/// Configuration for building and rendering a reflection model.
///
/// # Example
///
/// ```
/// use binding_reflect::{ReflectConfig, RenderOptions};
/// use binding_reflect_core::IdentityAccessorNaming;
///
/// let config = ReflectConfig::default()
///     .with_excluded_class("Internal")
///     .with_accessor_naming(IdentityAccessorNaming)
///     .with_render_options(RenderOptions::spaces(4));
///
/// assert!(config.is_excluded("Internal"));
/// assert!(config.is_excluded("Handle"));
/// ```
#[derive(Clone)]
pub struct ReflectConfig {
    /// Class names kept out of the listed classes.
    pub excluded_classes: FxHashSet<String>,
    /// Name of the global scope.
    pub global_scope_name: String,
    /// How accessor names map to property names.
    pub accessor_naming: Arc<dyn AccessorNaming>,
    /// Renderer settings used by `ReflectionModel::render_pseudo_interface`.
    pub render: RenderOptions,
}

impl Default for ReflectConfig {
    fn default() -> Self {
        Self {
            excluded_classes: DEFAULT_EXCLUDED_CLASSES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            global_scope_name: DEFAULT_GLOBAL_SCOPE_NAME.to_string(),
            accessor_naming: Arc::new(PrefixAccessorNaming::default()),
            render: RenderOptions::default(),
        }
    }
}

impl fmt::Debug for ReflectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut excluded: Vec<_> = self.excluded_classes.iter().collect();
        excluded.sort();
        f.debug_struct("ReflectConfig")
            .field("excluded_classes", &excluded)
            .field("global_scope_name", &self.global_scope_name)
            .field("accessor_naming", &self.accessor_naming)
            .field("render", &self.render)
            .finish()
    }
}

impl ReflectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // === Builder Methods ===

    /// Exclude another class name from the listed classes.
    pub fn with_excluded_class(mut self, name: impl Into<String>) -> Self {
        self.excluded_classes.insert(name.into());
        self
    }

    /// Drop the default exclusions.
    pub fn without_default_exclusions(mut self) -> Self {
        for name in DEFAULT_EXCLUDED_CLASSES {
            self.excluded_classes.remove(*name);
        }
        self
    }

    pub fn with_global_scope_name(mut self, name: impl Into<String>) -> Self {
        self.global_scope_name = name.into();
        self
    }

    pub fn with_accessor_naming(mut self, naming: impl AccessorNaming + 'static) -> Self {
        self.accessor_naming = Arc::new(naming);
        self
    }

    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    // === Query Methods ===

    /// Check if a class name is kept out of the listed classes.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_classes.contains(name)
    }
}
