//! Binding reflection core crate.
//!
//! This crate holds the data model shared by the registry and the builder:
//!
//! - Identifiers ([`TypeId`] from the declaration source, [`TypeIndex`] into the arena)
//! - Declaration records as delivered by a binding layer ([`Declaration`])
//! - The descriptor hierarchy ([`TypeEntry`] and its variants)
//! - Class accumulation ([`ClassEntry`], [`MethodEntry`], [`PropertyEntry`])
//! - Accessor naming policies ([`AccessorNaming`])
//! - The error taxonomy ([`ReflectError`])

mod declaration;
mod entries;
mod error;
mod flags;
mod ids;
mod kinds;
mod naming;

pub use declaration::{
    ClassDeclaration, Declaration, MemberDeclaration, OpaqueDeclaration, PrimitiveDeclaration,
};
pub use entries::{
    ClassEntry, CompositeEntry, MethodEntry, OpaqueEntry, PrimitiveEntry, PropertyEntry,
    TypeEntry,
};
pub use error::ReflectError;
pub use flags::PrimitiveFlags;
pub use ids::{TypeId, TypeIndex};
pub use kinds::{CompositeKind, CompositeQuery, SignatureKind, TypeKind};
pub use naming::{AccessorNaming, IdentityAccessorNaming, PrefixAccessorNaming};
