//! Binding reflection registry crate.
//!
//! Provides [`TypeRegistry`], the arena that owns every descriptor built from
//! a declaration stream, and the [`CompositeResolver`] seam through which
//! composite types are discovered on demand.

mod registry;
mod resolver;

pub use registry::{TypeRegistry, TypeSpec};
pub use resolver::{CompositeResolver, NoComposites};

pub use binding_reflect_core::{ReflectError, TypeEntry, TypeId, TypeIndex};
