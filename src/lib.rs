//! Native binding reflection.
//!
//! Consumes the flat declaration stream of a native binding layer and
//! rebuilds a typed, cross-referenced model of the library's public surface:
//! primitives, opaque types, classes with their methods and properties, and a
//! synthetic global scope for free functions. The model renders as a
//! pseudo-interface listing.
//!
//! # Example
//!
//! ```
//! use binding_reflect::{RecordedBinding, build_model};
//! use binding_reflect_core::{
//!     ClassDeclaration, MemberDeclaration, PrimitiveDeclaration, SignatureKind,
//! };
//!
//! let binding = RecordedBinding::new()
//!     .declare(PrimitiveDeclaration::new(1, "int32", 4))
//!     .declare(ClassDeclaration::new(10, "Widget"))
//!     .declare(MemberDeclaration::new(10, "", SignatureKind::Constructor, [10, 1]))
//!     .declare(MemberDeclaration::new(10, "get_size", SignatureKind::Getter, [1]))
//!     .declare(MemberDeclaration::new(10, "set_size", SignatureKind::Setter, [0, 1]));
//!
//! let model = build_model(&binding).unwrap();
//! assert_eq!(
//!     model.render_pseudo_interface(),
//!     "class Widget {\n\tWidget(int32);\n\n\tint32 size;\n};\n"
//! );
//! ```

mod binding;
mod builder;
mod config;
mod model;
mod recorded;
mod render;

pub use binding::{BindingLayer, DeclarationSink};
pub use builder::{BuildStats, ReflectionBuilder, build_model, build_model_with};
pub use config::{DEFAULT_EXCLUDED_CLASSES, DEFAULT_GLOBAL_SCOPE_NAME, ReflectConfig};
pub use model::ReflectionModel;
pub use recorded::{LoadError, RecordedBinding, load_model};
pub use render::{PseudoInterface, RenderOptions};

pub use binding_reflect_core::{
    AccessorNaming, IdentityAccessorNaming, PrefixAccessorNaming, ReflectError,
};
pub use binding_reflect_registry::{CompositeResolver, NoComposites, TypeRegistry};
