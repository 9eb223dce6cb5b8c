//! Declaration records delivered by a binding layer.
//!
//! A binding layer announces its surface as a flat stream of four record
//! kinds. The stream is not topologically sorted: a member may name type ids
//! that are declared later, or never declared and only explained by the
//! composite query.

use serde::{Deserialize, Serialize};

use crate::{PrimitiveFlags, SignatureKind, TypeId};

/// A primitive type: `(id, name, size, flags)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveDeclaration {
    pub id: TypeId,
    pub name: String,
    /// Storage size in bytes.
    pub size: u32,
    #[serde(default)]
    pub flags: PrimitiveFlags,
}

impl PrimitiveDeclaration {
    pub fn new(id: u32, name: impl Into<String>, size: u32) -> Self {
        Self {
            id: TypeId::new(id),
            name: name.into(),
            size,
            flags: PrimitiveFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: PrimitiveFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A type the model treats as opaque: `(id, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueDeclaration {
    pub id: TypeId,
    pub name: String,
}

impl OpaqueDeclaration {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: TypeId::new(id),
            name: name.into(),
        }
    }
}

/// A class: `(id, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub id: TypeId,
    pub name: String,
}

impl ClassDeclaration {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: TypeId::new(id),
            name: name.into(),
        }
    }
}

/// A class member or free function.
///
/// `types[0]` is the return type and the rest are argument types. For a
/// setter the value type is `types[1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDeclaration {
    pub class_id: TypeId,
    pub name: String,
    #[serde(rename = "signature")]
    pub kind: SignatureKind,
    pub types: Vec<TypeId>,
    #[serde(default)]
    pub policies: Vec<String>,
}

impl MemberDeclaration {
    pub fn new(
        class_id: u32,
        name: impl Into<String>,
        kind: SignatureKind,
        types: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            class_id: TypeId::new(class_id),
            name: name.into(),
            kind,
            types: types.into_iter().map(TypeId::new).collect(),
            policies: Vec::new(),
        }
    }

    /// Add a policy annotation.
    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policies.push(policy.into());
        self
    }
}

/// One item of the declaration stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Primitive(PrimitiveDeclaration),
    Opaque(OpaqueDeclaration),
    Class(ClassDeclaration),
    Member(MemberDeclaration),
}

impl From<PrimitiveDeclaration> for Declaration {
    fn from(decl: PrimitiveDeclaration) -> Self {
        Declaration::Primitive(decl)
    }
}

impl From<OpaqueDeclaration> for Declaration {
    fn from(decl: OpaqueDeclaration) -> Self {
        Declaration::Opaque(decl)
    }
}

impl From<ClassDeclaration> for Declaration {
    fn from(decl: ClassDeclaration) -> Self {
        Declaration::Class(decl)
    }
}

impl From<MemberDeclaration> for Declaration {
    fn from(decl: MemberDeclaration) -> Self {
        Declaration::Member(decl)
    }
}
