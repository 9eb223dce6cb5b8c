//! Kind enums shared by declarations, the registry and the class model.

use std::fmt;

use num_enum::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::TypeId;

/// Kind of a descriptor in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Fixed-size primitive (int, float, bool, void).
    Primitive,
    /// Integer too wide for the host number type.
    BigInt,
    /// Class with methods and properties.
    Class,
    /// Raw pointer to a class.
    ClassPointer,
    /// Shared (reference-counted) pointer to a class.
    SharedClassPointer,
    /// Growable sequence of an element type.
    Vector,
    /// Fixed-length array of an element type.
    FixedArray,
    /// NUL-terminated character string.
    CString,
    /// Type the model does not otherwise understand.
    Other,
}

impl TypeKind {
    /// Get a short lowercase name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TypeKind::Primitive => "primitive",
            TypeKind::BigInt => "big-integer",
            TypeKind::Class => "class",
            TypeKind::ClassPointer => "class-pointer",
            TypeKind::SharedClassPointer => "shared-class-pointer",
            TypeKind::Vector => "vector",
            TypeKind::FixedArray => "fixed-array",
            TypeKind::CString => "c-string",
            TypeKind::Other => "other",
        }
    }

    /// Check if this kind is discovered through the composite query.
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            TypeKind::ClassPointer
                | TypeKind::SharedClassPointer
                | TypeKind::Vector
                | TypeKind::FixedArray
                | TypeKind::CString
        )
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature kind of a member declaration.
///
/// Raw wire codes convert with [`SignatureKind::from`]; codes the model does not
/// know land in [`SignatureKind::Unknown`] and the member is ignored.
///
/// ```
/// use binding_reflect_core::SignatureKind;
///
/// assert_eq!(SignatureKind::from(3), SignatureKind::Getter);
/// assert_eq!(SignatureKind::from(99), SignatureKind::Unknown(99));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
#[repr(u32)]
pub enum SignatureKind {
    /// Constructor; stored as a static method with an empty name.
    Constructor = 0,
    /// Free function.
    Function = 1,
    /// Instance method.
    Method = 2,
    /// Property getter.
    Getter = 3,
    /// Property setter.
    Setter = 4,
    /// Any code not listed above.
    #[num_enum(catch_all)]
    Unknown(u32),
}

impl SignatureKind {
    /// Get the raw wire code.
    pub const fn code(self) -> u32 {
        match self {
            SignatureKind::Constructor => 0,
            SignatureKind::Function => 1,
            SignatureKind::Method => 2,
            SignatureKind::Getter => 3,
            SignatureKind::Setter => 4,
            SignatureKind::Unknown(code) => code,
        }
    }

    /// Check if this kind declares a method (constructor, function or method).
    pub const fn is_method(self) -> bool {
        matches!(
            self,
            SignatureKind::Constructor | SignatureKind::Function | SignatureKind::Method
        )
    }

    /// Check if this kind declares a property accessor.
    pub const fn is_accessor(self) -> bool {
        matches!(self, SignatureKind::Getter | SignatureKind::Setter)
    }

    /// Check if methods of this kind are static.
    pub const fn is_static(self) -> bool {
        matches!(self, SignatureKind::Constructor | SignatureKind::Function)
    }
}

impl From<SignatureKind> for u32 {
    fn from(kind: SignatureKind) -> Self {
        kind.code()
    }
}

/// Kind of composite type answered by the composite query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeKind {
    /// `target*`
    ClassPointer,
    /// `shared_ptr<target>`
    SharedClassPointer,
    /// `vector<target>` or `vector<target, param>`
    Vector,
    /// `target[length]`
    FixedArray { length: u32 },
    /// `const char*`; `target` is the character type.
    CString,
}

impl CompositeKind {
    /// Get the descriptor kind this composite constructs.
    pub const fn type_kind(self) -> TypeKind {
        match self {
            CompositeKind::ClassPointer => TypeKind::ClassPointer,
            CompositeKind::SharedClassPointer => TypeKind::SharedClassPointer,
            CompositeKind::Vector => TypeKind::Vector,
            CompositeKind::FixedArray { .. } => TypeKind::FixedArray,
            CompositeKind::CString => TypeKind::CString,
        }
    }

    /// Synthesize the display name from the resolved target and param names.
    pub fn type_name(self, target: &str, param: Option<&str>) -> String {
        match self {
            CompositeKind::ClassPointer => format!("{target}*"),
            CompositeKind::SharedClassPointer => format!("shared_ptr<{target}>"),
            CompositeKind::Vector => match param {
                Some(param) => format!("vector<{target}, {param}>"),
                None => format!("vector<{target}>"),
            },
            CompositeKind::FixedArray { length } => format!("{target}[{length}]"),
            CompositeKind::CString => "const char*".to_string(),
        }
    }
}

/// Answer of the composite query for one type id.
///
/// `target` is always resolved; `param` is resolved when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeQuery {
    pub kind: CompositeKind,
    pub target: TypeId,
    #[serde(default)]
    pub param: Option<TypeId>,
}

impl CompositeQuery {
    /// Create a query answer without a param type.
    pub fn new(kind: CompositeKind, target: TypeId) -> Self {
        Self {
            kind,
            target,
            param: None,
        }
    }

    /// Attach a param type.
    pub fn with_param(mut self, param: TypeId) -> Self {
        self.param = Some(param);
        self
    }
}
