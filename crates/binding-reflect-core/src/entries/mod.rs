//! Descriptor entries.
//!
//! - [`TypeEntry`] - Unified enum stored in the registry arena
//! - [`PrimitiveEntry`] - Primitives and big integers
//! - [`OpaqueEntry`] - Types the model does not otherwise understand
//! - [`CompositeEntry`] - Pointers, vectors, arrays and C-strings
//! - [`ClassEntry`] - Classes, including the synthetic global scope
//!
//! Member types:
//! - [`MethodEntry`], [`PropertyEntry`]

mod class;
mod composite;
mod member;
mod primitive;
mod type_entry;

pub use class::ClassEntry;
pub use composite::CompositeEntry;
pub use member::{MethodEntry, PropertyEntry};
pub use primitive::{OpaqueEntry, PrimitiveEntry};
pub use type_entry::TypeEntry;
