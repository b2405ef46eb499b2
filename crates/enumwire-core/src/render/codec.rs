//! Enum rendering shared by the XML and JSON renderers

use super::{open_module, str_literal};
use crate::schema::EnumDeclaration;

/// What distinguishes one text codec from another in generated code
pub(crate) struct Codec {
    /// Runtime trait implemented for each enum
    pub trait_name: &'static str,
    /// Trait method returning the wire name
    pub to_name: &'static str,
    /// Trait constructor from a wire name
    pub from_name: &'static str,
    /// Runtime module with the generic serde functions
    pub runtime_module: &'static str,
    /// Suffix of generated adapter modules
    pub module_suffix: &'static str,
    /// Format name used in doc comments
    pub label: &'static str,
}

impl Codec {
    /// Name of the serde adapter module generated for an enum
    pub fn adapter_module(&self, declaration: &EnumDeclaration) -> String {
        format!("{}_{}", declaration.snake_key(), self.module_suffix)
    }
}

/// Render the trait impl and serde adapter module for one enum.
pub(crate) fn render_enum(codec: &Codec, declaration: &EnumDeclaration, code: &mut String) {
    let rust_path = declaration.rust_path();
    let wire = declaration.wire();

    code.push('\n');
    code.push_str(&format!(
        "impl ::enumwire_runtime::{} for {} {{\n",
        codec.trait_name, rust_path
    ));
    code.push_str(&format!(
        "    const ENUM_NAME: &'static str = {};\n",
        str_literal(declaration.name())
    ));

    // Declared name -> wire name
    code.push('\n');
    code.push_str(&format!(
        "    fn {}(&self) -> &'static str {{\n",
        codec.to_name
    ));
    let renamed: Vec<(&str, &str)> = wire
        .entries()
        .filter(|(declared, wire)| declared != wire)
        .collect();
    if renamed.is_empty() {
        code.push_str("        self.as_str_name()\n");
    } else {
        code.push_str("        match self.as_str_name() {\n");
        for (declared, wire) in renamed {
            code.push_str(&format!(
                "            {} => {},\n",
                str_literal(declared),
                str_literal(wire)
            ));
        }
        code.push_str("            other => other,\n");
        code.push_str("        }\n");
    }
    code.push_str("    }\n");

    // Accepted input -> declared name
    code.push('\n');
    code.push_str(&format!(
        "    fn {}(name: &str) -> ::core::option::Option<Self> {{\n",
        codec.from_name
    ));
    code.push_str("        let declared = match name {\n");
    for (input, declared) in wire.accepted_inputs() {
        code.push_str(&format!(
            "            {} => {},\n",
            str_literal(input),
            str_literal(declared)
        ));
    }
    code.push_str("            _ => return ::core::option::Option::None,\n");
    code.push_str("        };\n");
    code.push_str("        Self::from_str_name(declared)\n");
    code.push_str("    }\n");
    code.push_str("}\n");

    render_adapter(codec, declaration, &rust_path, code);
}

/// Serde `with` module for `i32` fields holding the enum, with `option` and
/// `vec` submodules for `Option<i32>` and `Vec<i32>` fields.
fn render_adapter(codec: &Codec, declaration: &EnumDeclaration, rust_path: &str, code: &mut String) {
    let runtime = format!("::enumwire_runtime::{}", codec.runtime_module);

    code.push('\n');
    code.push_str(&format!(
        "/// Serde adapter for `i32` fields holding [`{}`] as {} wire names.\n",
        rust_path, codec.label
    ));
    open_module(code, &codec.adapter_module(declaration));
    push_functions(
        code,
        "    ",
        &runtime,
        &format!("super::{rust_path}"),
        ("&i32", "i32"),
    );

    for (submodule, value, owned) in [
        ("option", "&::core::option::Option<i32>", "::core::option::Option<i32>"),
        ("vec", "&[i32]", "::std::vec::Vec<i32>"),
    ] {
        code.push('\n');
        code.push_str(&format!("    pub mod {submodule} {{\n"));
        push_functions(
            code,
            "        ",
            &format!("{runtime}::{submodule}"),
            &format!("super::super::{rust_path}"),
            (value, owned),
        );
        code.push_str("    }\n");
    }
    code.push_str("}\n");
}

/// `serialize`/`deserialize` delegating to one runtime module.
fn push_functions(
    code: &mut String,
    indent: &str,
    runtime: &str,
    enum_path: &str,
    (value, owned): (&str, &str),
) {
    code.push_str(&format!(
        "{indent}pub fn serialize<S>(value: {value}, serializer: S) -> ::core::result::Result<S::Ok, S::Error>\n"
    ));
    code.push_str(&format!("{indent}where\n"));
    code.push_str(&format!(
        "{indent}    S: ::enumwire_runtime::serde::Serializer,\n"
    ));
    code.push_str(&format!("{indent}{{\n"));
    code.push_str(&format!(
        "{indent}    {runtime}::serialize::<{enum_path}, S>(value, serializer)\n"
    ));
    code.push_str(&format!("{indent}}}\n"));
    code.push('\n');
    code.push_str(&format!(
        "{indent}pub fn deserialize<'de, D>(deserializer: D) -> ::core::result::Result<{owned}, D::Error>\n"
    ));
    code.push_str(&format!("{indent}where\n"));
    code.push_str(&format!(
        "{indent}    D: ::enumwire_runtime::serde::Deserializer<'de>,\n"
    ));
    code.push_str(&format!("{indent}{{\n"));
    code.push_str(&format!(
        "{indent}    {runtime}::deserialize::<{enum_path}, D>(deserializer)\n"
    ));
    code.push_str(&format!("{indent}}}\n"));
}
