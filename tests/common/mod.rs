//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use binding_reflect::RecordedBinding;
use binding_reflect_core::{
    ClassDeclaration, Declaration, MemberDeclaration, PrimitiveDeclaration, PrimitiveFlags,
    SignatureKind,
};

/// Route builder logs to the test output. Safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn int32() -> PrimitiveDeclaration {
    PrimitiveDeclaration::new(1, "int32", 4).with_flags(PrimitiveFlags::SIGNED)
}

pub fn member(class_id: u32, name: &str, kind: SignatureKind, types: &[u32]) -> Declaration {
    MemberDeclaration::new(class_id, name, kind, types.iter().copied()).into()
}

/// The Widget stream: a constructor and a read-write `size` property.
pub fn widget_binding() -> RecordedBinding {
    RecordedBinding::new()
        .declare(int32())
        .declare(ClassDeclaration::new(10, "Widget"))
        .declare(member(10, "", SignatureKind::Constructor, &[10, 1]))
        .declare(member(10, "get_size", SignatureKind::Getter, &[1]))
        .declare(member(10, "set_size", SignatureKind::Setter, &[0, 1]))
}
