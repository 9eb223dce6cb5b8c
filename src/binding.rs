//! Seams between the builder and the native binding layer.
//!
//! The binding layer owns the declaration stream and answers composite
//! queries; the builder owns everything it constructs. Both calls are
//! synchronous and the layer never calls back into the builder outside of
//! [`BindingLayer::subscribe`].

use binding_reflect_core::{
    ClassDeclaration, Declaration, MemberDeclaration, OpaqueDeclaration, PrimitiveDeclaration,
    ReflectError,
};
use binding_reflect_registry::CompositeResolver;

/// Receiver of the declaration stream, one call per declaration.
///
/// Any error aborts the stream; the binding layer must propagate it out of
/// [`BindingLayer::subscribe`] unchanged.
pub trait DeclarationSink {
    fn declare_primitive(&mut self, decl: &PrimitiveDeclaration) -> Result<(), ReflectError>;

    fn declare_opaque(&mut self, decl: &OpaqueDeclaration) -> Result<(), ReflectError>;

    fn declare_class(&mut self, decl: &ClassDeclaration) -> Result<(), ReflectError>;

    fn declare_member(&mut self, decl: &MemberDeclaration) -> Result<(), ReflectError>;

    /// Dispatch an owned stream item to its handler.
    fn declare(&mut self, decl: &Declaration) -> Result<(), ReflectError> {
        match decl {
            Declaration::Primitive(decl) => self.declare_primitive(decl),
            Declaration::Opaque(decl) => self.declare_opaque(decl),
            Declaration::Class(decl) => self.declare_class(decl),
            Declaration::Member(decl) => self.declare_member(decl),
        }
    }
}

/// A source of declarations: the native library's introspection feed.
///
/// The layer also answers composite queries through its
/// [`CompositeResolver`] supertrait.
pub trait BindingLayer: CompositeResolver {
    /// Name of the identity/handle value type the layer exchanges with the
    /// host. It is never listed as an ordinary class.
    fn handle_type_name(&self) -> Option<&str> {
        None
    }

    /// Deliver every declaration to `sink`, in the layer's own order.
    fn subscribe(&self, sink: &mut dyn DeclarationSink) -> Result<(), ReflectError>;
}
