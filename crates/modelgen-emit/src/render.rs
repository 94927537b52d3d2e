use std::collections::BTreeSet;
use std::fmt::Write;

use modelgen_core::{snake_case, ScalarType};

use crate::class::{ClassModel, FieldRepr, FieldSpec};
use crate::fields::{rust_scalar_type, FieldKind};

/// Render one generated class as a Rust source unit.
///
/// Output is a pure function of the class model, so regenerating from an
/// unchanged model yields byte-identical text.
pub fn render_class(class: &ClassModel) -> String {
    let mut out = String::new();
    let name = &class.name;

    let _ = writeln!(out, "//! Generated by modelgen; do not edit.");
    let _ = writeln!(out);

    let imports = referenced_targets(class);
    if !imports.is_empty() {
        for target in &imports {
            let _ = writeln!(out, "use super::{}::{};", module_name(target), target);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "/// Generated data class for the `{name}` entity.");
    if class.chain.len() > 1 {
        let ancestors = class.chain[1..].join(" -> ");
        let _ = writeln!(out, "///");
        let _ = writeln!(out, "/// Substitutable for its ancestors: {ancestors}.");
    }
    let _ = writeln!(out, "#[derive(Debug, Clone)]");
    let _ = writeln!(out, "pub struct {name} {{");
    for field in &class.fields {
        let _ = writeln!(out, "    {}: {},", field_ident(&field.name), field_type(field));
    }
    let _ = writeln!(out, "}}");
    let _ = writeln!(out);

    let _ = writeln!(out, "impl {name} {{");
    let chain = class
        .chain
        .iter()
        .map(|ancestor| format!("\"{ancestor}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(
        out,
        "    pub const TYPE_CHAIN: &'static [&'static str] = &[{chain}];"
    );
    let _ = writeln!(out);

    render_constructor(&mut out, class);
    let _ = writeln!(out);

    let _ = writeln!(out, "    /// Membership check against any ancestor type.");
    let _ = writeln!(out, "    pub fn is_instance_of(&self, type_name: &str) -> bool {{");
    let _ = writeln!(out, "        Self::TYPE_CHAIN.contains(&type_name)");
    let _ = writeln!(out, "    }}");

    for field in &class.fields {
        let _ = writeln!(out);
        render_accessors(&mut out, class, field);
    }

    let _ = writeln!(out, "}}");
    let _ = writeln!(out);

    let _ = writeln!(out, "impl Default for {name} {{");
    let _ = writeln!(out, "    fn default() -> Self {{");
    let _ = writeln!(out, "        Self::new()");
    let _ = writeln!(out, "    }}");
    let _ = writeln!(out, "}}");

    out
}

/// Render the module index listing every generated class.
pub fn render_module_index(classes: &[ClassModel]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "//! Generated by modelgen; do not edit.");
    let _ = writeln!(out);
    for class in classes {
        let _ = writeln!(out, "pub mod {};", module_name(&class.name));
    }
    let _ = writeln!(out);
    for class in classes {
        let _ = writeln!(out, "pub use {}::{};", module_name(&class.name), class.name);
    }
    out
}

fn render_constructor(out: &mut String, class: &ClassModel) {
    let _ = writeln!(
        out,
        "    /// Construct an instance with every field unset and every"
    );
    let _ = writeln!(out, "    /// collection empty.");
    let _ = writeln!(out, "    pub fn new() -> Self {{");
    let _ = writeln!(out, "        Self {{");
    for field in &class.fields {
        let init = match &field.repr {
            FieldRepr::Relation(FieldKind::OrderedCollection { .. }) => "Vec::new()",
            _ => "None",
        };
        let _ = writeln!(out, "            {}: {},", field_ident(&field.name), init);
    }
    let _ = writeln!(out, "        }}");
    let _ = writeln!(out, "    }}");
}

fn render_accessors(out: &mut String, class: &ClassModel, field: &FieldSpec) {
    let ident = field_ident(&field.name);
    let raw = ident.trim_start_matches("r#");
    if field.declared_by != class.name {
        let _ = writeln!(out, "    /// Inherited from `{}`.", field.declared_by);
    }
    match &field.repr {
        FieldRepr::Attribute(scalar) => {
            let ty = rust_scalar_type(*scalar);
            match scalar {
                ScalarType::Text => {
                    let _ = writeln!(out, "    pub fn {ident}(&self) -> Option<&{ty}> {{");
                    let _ = writeln!(out, "        self.{ident}.as_ref()");
                }
                _ => {
                    let _ = writeln!(out, "    pub fn {ident}(&self) -> Option<{ty}> {{");
                    let _ = writeln!(out, "        self.{ident}");
                }
            }
            let _ = writeln!(out, "    }}");
            let _ = writeln!(out);
            let _ = writeln!(out, "    pub fn set_{raw}(&mut self, value: {ty}) {{");
            let _ = writeln!(out, "        self.{ident} = Some(value);");
            let _ = writeln!(out, "    }}");
        }
        FieldRepr::Relation(FieldKind::Scalar { target }) => {
            let _ = writeln!(out, "    pub fn {ident}(&self) -> Option<&{target}> {{");
            let _ = writeln!(out, "        self.{ident}.as_deref()");
            let _ = writeln!(out, "    }}");
            let _ = writeln!(out);
            let _ = writeln!(out, "    pub fn set_{raw}(&mut self, value: {target}) {{");
            let _ = writeln!(out, "        self.{ident} = Some(Box::new(value));");
            let _ = writeln!(out, "    }}");
        }
        FieldRepr::Relation(FieldKind::OrderedCollection { target }) => {
            let _ = writeln!(out, "    pub fn {ident}(&self) -> &[{target}] {{");
            let _ = writeln!(out, "        &self.{ident}");
            let _ = writeln!(out, "    }}");
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "    pub fn {raw}_mut(&mut self) -> &mut Vec<{target}> {{"
            );
            let _ = writeln!(out, "        &mut self.{ident}");
            let _ = writeln!(out, "    }}");
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "    pub fn set_{raw}(&mut self, value: Vec<{target}>) {{"
            );
            let _ = writeln!(out, "        self.{ident} = value;");
            let _ = writeln!(out, "    }}");
        }
        FieldRepr::Relation(FieldKind::FixedTuple { target, len }) => {
            let _ = writeln!(
                out,
                "    pub fn {ident}(&self) -> Option<&[{target}; {len}]> {{"
            );
            let _ = writeln!(out, "        self.{ident}.as_deref()");
            let _ = writeln!(out, "    }}");
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "    pub fn set_{raw}(&mut self, value: [{target}; {len}]) {{"
            );
            let _ = writeln!(out, "        self.{ident} = Some(Box::new(value));");
            let _ = writeln!(out, "    }}");
        }
    }
}

// Link and tuple targets are boxed so a class may reference itself (or a
// cycle of classes) without becoming infinitely sized, matching the
// instance runtime's boxed links.
fn field_type(field: &FieldSpec) -> String {
    match &field.repr {
        FieldRepr::Attribute(scalar) => format!("Option<{}>", rust_scalar_type(*scalar)),
        FieldRepr::Relation(FieldKind::Scalar { target }) => format!("Option<Box<{target}>>"),
        FieldRepr::Relation(FieldKind::OrderedCollection { target }) => format!("Vec<{target}>"),
        FieldRepr::Relation(FieldKind::FixedTuple { target, len }) => {
            format!("Option<Box<[{target}; {len}]>>")
        }
    }
}

fn referenced_targets(class: &ClassModel) -> BTreeSet<String> {
    class
        .fields
        .iter()
        .filter_map(|field| match &field.repr {
            FieldRepr::Relation(kind) => Some(kind.target().to_string()),
            FieldRepr::Attribute(_) => None,
        })
        .filter(|target| target != &class.name)
        .collect()
}

/// Module file name for an entity, `r#`-escaped where it collides with a
/// keyword (e.g. `Match` -> `r#match`).
pub fn module_name(entity: &str) -> String {
    escape_keyword(&snake_case(entity))
}

fn field_ident(name: &str) -> String {
    escape_keyword(&snake_case(name))
}

fn escape_keyword(ident: &str) -> String {
    const KEYWORDS: &[&str] = &[
        "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else",
        "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
        "type", "unsafe", "use", "where", "while",
    ];
    if KEYWORDS.contains(&ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}
