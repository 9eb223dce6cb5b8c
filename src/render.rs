//! Pseudo-interface renderer.
//!
//! Produces an indentation-based listing of a [`ReflectionModel`]:
//!
//! ```text
//! class Widget {
//! 	Widget(int32);
//! 	void resize(int32, int32); // allow_raw_pointers
//!
//! 	int32 size;
//! 	int32 id; // Read-only
//! };
//!
//! static int32 add(int32, int32);
//! ```
//!
//! Classes come first, in model order; the global scope follows, unwrapped
//! and unindented.

use std::fmt::{self, Write};

use binding_reflect_core::{ClassEntry, MethodEntry, PropertyEntry, TypeIndex};
use binding_reflect_registry::TypeRegistry;

use crate::ReflectionModel;

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// One indentation level for class members.
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

impl RenderOptions {
    /// Indent with `count` spaces instead of a tab.
    pub fn spaces(count: usize) -> Self {
        Self {
            indent: " ".repeat(count),
        }
    }
}

/// Display adapter rendering a model as a pseudo-interface.
pub struct PseudoInterface<'a> {
    model: &'a ReflectionModel,
    options: &'a RenderOptions,
}

impl<'a> PseudoInterface<'a> {
    pub fn new(model: &'a ReflectionModel, options: &'a RenderOptions) -> Self {
        Self { model, options }
    }
}

impl fmt::Display for PseudoInterface<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.model.registry();
        let mut first = true;

        for class in self.model.classes() {
            if !first {
                f.write_char('\n')?;
            }
            first = false;
            writeln!(f, "class {} {{", class.name)?;
            write_members(f, registry, class, &self.options.indent)?;
            f.write_str("};\n")?;
        }

        if let Some(global) = self.model.global_scope() {
            if !first {
                f.write_char('\n')?;
            }
            write_members(f, registry, global, "")?;
        }
        Ok(())
    }
}

fn write_members(
    f: &mut fmt::Formatter<'_>,
    registry: &TypeRegistry,
    class: &ClassEntry,
    indent: &str,
) -> fmt::Result {
    for method in class.methods() {
        f.write_str(indent)?;
        write_method(f, registry, method)?;
        f.write_char('\n')?;
    }
    if !class.methods().is_empty() && !class.properties().is_empty() {
        f.write_char('\n')?;
    }
    for property in class.properties() {
        f.write_str(indent)?;
        write_property(f, registry, property)?;
        f.write_char('\n')?;
    }
    Ok(())
}

fn write_method(
    f: &mut fmt::Formatter<'_>,
    registry: &TypeRegistry,
    method: &MethodEntry,
) -> fmt::Result {
    let ret = type_name(registry, method.return_type);
    if method.is_constructor() {
        write!(f, "{ret}(")?;
    } else {
        if method.is_static {
            f.write_str("static ")?;
        }
        write!(f, "{ret} {}(", method.name)?;
    }
    for (i, &arg) in method.args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(registry.type_name(arg))?;
    }
    f.write_str(");")?;
    if !method.policies.is_empty() {
        write!(f, " // {}", method.policies.join(", "))?;
    }
    Ok(())
}

fn write_property(
    f: &mut fmt::Formatter<'_>,
    registry: &TypeRegistry,
    property: &PropertyEntry,
) -> fmt::Result {
    write!(f, "{} {};", type_name(registry, property.value_type), property.name)?;
    if property.is_read_only() {
        f.write_str(" // Read-only")?;
    } else if property.is_write_only() {
        f.write_str(" // Write-only")?;
    }
    Ok(())
}

fn type_name(registry: &TypeRegistry, index: Option<TypeIndex>) -> &str {
    index.map_or("void", |index| registry.type_name(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeclarationSink, ReflectConfig, ReflectionBuilder};
    use binding_reflect_core::{
        ClassDeclaration, MemberDeclaration, PrimitiveDeclaration, SignatureKind,
    };
    use binding_reflect_registry::NoComposites;

    fn model_with(decls: impl FnOnce(&mut ReflectionBuilder<'_, NoComposites>)) -> ReflectionModel {
        let mut builder = ReflectionBuilder::new(ReflectConfig::default(), &NoComposites);
        builder
            .declare_primitive(&PrimitiveDeclaration::new(1, "int32", 4))
            .unwrap();
        decls(&mut builder);
        builder.finish().unwrap()
    }

    #[test]
    fn renders_policies_comment() {
        let model = model_with(|b| {
            b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
            b.declare_member(
                &MemberDeclaration::new(10, "resize", SignatureKind::Method, [0, 1, 1])
                    .with_policy("allow_raw_pointers")
                    .with_policy("async"),
            )
            .unwrap();
        });
        assert_eq!(
            model.render_pseudo_interface(),
            "class Widget {\n\tvoid resize(int32, int32); // allow_raw_pointers, async\n};\n"
        );
    }

    #[test]
    fn renders_access_comments() {
        let model = model_with(|b| {
            b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
            b.declare_member(&MemberDeclaration::new(10, "get_id", SignatureKind::Getter, [1]))
                .unwrap();
            b.declare_member(&MemberDeclaration::new(10, "set_hint", SignatureKind::Setter, [0, 1]))
                .unwrap();
        });
        assert_eq!(
            model.render_pseudo_interface(),
            "class Widget {\n\tint32 id; // Read-only\n\tint32 hint; // Write-only\n};\n"
        );
    }

    #[test]
    fn renders_static_methods() {
        let model = model_with(|b| {
            b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
            b.declare_member(&MemberDeclaration::new(10, "create", SignatureKind::Function, [10]))
                .unwrap();
        });
        assert_eq!(
            model.render_pseudo_interface(),
            "class Widget {\n\tstatic Widget create();\n};\n"
        );
    }

    #[test]
    fn renders_empty_class() {
        let model = model_with(|b| {
            b.declare_class(&ClassDeclaration::new(10, "Empty")).unwrap();
        });
        assert_eq!(model.render_pseudo_interface(), "class Empty {\n};\n");
    }

    #[test]
    fn renders_with_spaces() {
        let model = model_with(|b| {
            b.declare_class(&ClassDeclaration::new(10, "Widget")).unwrap();
            b.declare_member(&MemberDeclaration::new(10, "draw", SignatureKind::Method, [0]))
                .unwrap();
        });
        assert_eq!(
            model.render_with(&RenderOptions::spaces(2)),
            "class Widget {\n  void draw();\n};\n"
        );
    }

    #[test]
    fn display_matches_render() {
        let model = model_with(|b| {
            b.declare_member(&MemberDeclaration::new(77, "tick", SignatureKind::Function, [0]))
                .unwrap();
        });
        assert_eq!(model.to_string(), model.render_pseudo_interface());
        assert_eq!(model.to_string(), "static void tick();\n");
    }

    #[test]
    fn empty_model_renders_nothing() {
        let model = model_with(|_| {});
        assert_eq!(model.render_pseudo_interface(), "");
    }
}
