//! Rendered pseudo-interface output.

mod common;

use binding_reflect::{
    RecordedBinding, ReflectConfig, RenderOptions, build_model, build_model_with,
};
use binding_reflect_core::{ClassDeclaration, CompositeKind, Declaration, SignatureKind};

use common::{init_logging, int32, member, widget_binding};

#[test]
fn widget_example_renders_exactly() {
    init_logging();
    let model = build_model(&widget_binding()).unwrap();
    assert_eq!(
        model.render_pseudo_interface(),
        "class Widget {\n\tWidget(int32);\n\n\tint32 size;\n};\n"
    );
}

fn scene_declarations() -> (Vec<Declaration>, Vec<Declaration>, Vec<Declaration>) {
    let types = vec![
        int32().into(),
        ClassDeclaration::new(10, "Widget").into(),
        ClassDeclaration::new(11, "Button").into(),
        ClassDeclaration::new(12, "Label").into(),
    ];
    let members = vec![
        member(10, "", SignatureKind::Constructor, &[10]),
        member(10, "draw", SignatureKind::Method, &[0]),
        member(10, "get_width", SignatureKind::Getter, &[1]),
        member(11, "click", SignatureKind::Method, &[0]),
        member(12, "get_text", SignatureKind::Getter, &[1]),
        member(12, "set_text", SignatureKind::Setter, &[0, 1]),
    ];
    let free = vec![
        member(99, "version", SignatureKind::Function, &[1]),
        member(99, "add", SignatureKind::Function, &[1, 1, 1]),
        member(99, "reset", SignatureKind::Function, &[0]),
    ];
    (types, members, free)
}

fn binding_from(decls: impl IntoIterator<Item = Declaration>) -> RecordedBinding {
    decls
        .into_iter()
        .fold(RecordedBinding::new(), |binding, decl| binding.declare(decl))
}

#[test]
fn permuted_streams_render_identically() {
    init_logging();
    let (types, members, free) = scene_declarations();

    let forward = binding_from(types.iter().chain(&members).chain(&free).cloned());

    // Classes and free functions reversed, Label's members moved first.
    let mut reversed_types = types.clone();
    reversed_types[1..].reverse();
    let mut reversed_free = free.clone();
    reversed_free.reverse();
    let permuted = binding_from(
        reversed_types
            .into_iter()
            .chain(reversed_free)
            .chain(members.iter().filter(|decl| is_for(decl, 12)).cloned())
            .chain(members.iter().filter(|decl| !is_for(decl, 12)).cloned()),
    );

    let expected = build_model(&forward).unwrap().render_pseudo_interface();
    let actual = build_model(&permuted).unwrap().render_pseudo_interface();
    assert_eq!(actual, expected);
    assert_eq!(
        expected,
        "class Button {\n\
         \tvoid click();\n\
         };\n\
         \n\
         class Label {\n\
         \tint32 text;\n\
         };\n\
         \n\
         class Widget {\n\
         \tWidget();\n\
         \tvoid draw();\n\
         \n\
         \tint32 width; // Read-only\n\
         };\n\
         \n\
         static int32 add(int32, int32);\n\
         static void reset();\n\
         static int32 version();\n"
    );
}

#[test]
fn types_declared_after_their_members_render_identically() {
    init_logging();
    let (types, members, free) = scene_declarations();
    let forward = binding_from(types.iter().chain(&members).chain(&free).cloned());

    let mut late_types = types.clone();
    late_types.reverse();
    let members_first = binding_from(members.iter().chain(&free).cloned().chain(late_types));

    let expected = build_model(&forward).unwrap().render_pseudo_interface();
    let actual = build_model(&members_first).unwrap().render_pseudo_interface();
    assert_eq!(actual, expected);
}

fn is_for(decl: &Declaration, class_id: u32) -> bool {
    matches!(decl, Declaration::Member(member) if member.class_id.raw() == class_id)
}

#[test]
fn methods_keep_declaration_order_within_class() {
    init_logging();
    let binding = RecordedBinding::new()
        .declare(ClassDeclaration::new(10, "Widget"))
        .declare(member(10, "zoom", SignatureKind::Method, &[0]))
        .declare(member(10, "apply", SignatureKind::Method, &[0]));

    let model = build_model(&binding).unwrap();
    assert_eq!(
        model.render_pseudo_interface(),
        "class Widget {\n\tvoid zoom();\n\tvoid apply();\n};\n"
    );
}

#[test]
fn composite_names_render() {
    init_logging();
    let binding = RecordedBinding::new()
        .declare(int32())
        .declare(ClassDeclaration::new(10, "Node"))
        .declare(member(10, "parent", SignatureKind::Method, &[20]))
        .declare(member(10, "children", SignatureKind::Method, &[21]))
        .declare(member(10, "shared", SignatureKind::Method, &[22]))
        .declare(member(10, "label", SignatureKind::Method, &[23]))
        .declare(member(10, "corners", SignatureKind::Method, &[24]))
        .composite(20, CompositeKind::ClassPointer, 10)
        .composite(21, CompositeKind::Vector, 20)
        .composite(22, CompositeKind::SharedClassPointer, 10)
        .composite(23, CompositeKind::CString, 0)
        .composite(24, CompositeKind::FixedArray { length: 4 }, 1);

    let model = build_model(&binding).unwrap();
    assert_eq!(
        model.render_pseudo_interface(),
        "class Node {\n\
         \tNode* parent();\n\
         \tvector<Node*> children();\n\
         \tshared_ptr<Node> shared();\n\
         \tconst char* label();\n\
         \tint32[4] corners();\n\
         };\n"
    );
}

#[test]
fn configured_indent_is_used() {
    init_logging();
    let config = ReflectConfig::default().with_render_options(RenderOptions::spaces(4));
    let model = build_model_with(&widget_binding(), config).unwrap();
    assert_eq!(
        model.to_string(),
        "class Widget {\n    Widget(int32);\n\n    int32 size;\n};\n"
    );
    assert_eq!(
        model.render_with(&RenderOptions::default()),
        "class Widget {\n\tWidget(int32);\n\n\tint32 size;\n};\n"
    );
}
