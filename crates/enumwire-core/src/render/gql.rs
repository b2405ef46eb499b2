//! GraphQL renderer: static enum declarations for schema stitching.
//!
//! Nested enums are named by joining the nesting path with `_`
//! (`MessageWithNestedEnum_Nested`). Members are wire names; source comments
//! become descriptions. Wire names GraphQL reserves (`true`, `false`, `null`)
//! are emitted as is and logged as a warning.

use super::raw_str_literal;
use crate::naming::{file_stem, upper_snake};
use crate::schema::{EnumDeclaration, SchemaFile};

pub(crate) fn render_body(file: &SchemaFile, code: &mut String) {
    let declarations: Vec<String> = file.enums().iter().map(declaration_text).collect();

    for (declaration, text) in file.enums().iter().zip(&declarations) {
        code.push('\n');
        code.push_str(&format!(
            "/// GraphQL declaration of `{}`.\n",
            declaration.schema_type_name()
        ));
        code.push_str(&format!(
            "pub const {}_GRAPHQL: &str = {};\n",
            declaration.upper_key(),
            raw_str_literal(text)
        ));
    }

    code.push('\n');
    code.push_str(&format!(
        "/// Every enum declared in `{}`, in declaration order.\n",
        file.name()
    ));
    code.push_str(&format!(
        "pub const {}: &str = {};\n",
        schema_const_name(file),
        raw_str_literal(&declarations.join("\n\n"))
    ));
}

/// Name of the constant holding all of a file's declarations
pub fn schema_const_name(file: &SchemaFile) -> String {
    format!("{}_GRAPHQL_SCHEMA", upper_snake(file_stem(file.name())))
}

/// GraphQL SDL for one enum.
pub fn declaration_text(declaration: &EnumDeclaration) -> String {
    let mut sdl = String::new();
    if let Some(comment) = declaration.comment() {
        push_description(&mut sdl, comment, "");
    }
    sdl.push_str(&format!("enum {} {{\n", declaration.schema_type_name()));
    for value in declaration.values() {
        if let Some(comment) = value.comment() {
            push_description(&mut sdl, comment, "  ");
        }
        let wire = declaration
            .wire()
            .wire_name(value.name())
            .unwrap_or(value.name());
        if is_reserved_enum_value(wire) {
            tracing::warn!(
                enum_name = %declaration.schema_type_name(),
                value = wire,
                "GraphQL does not allow true, false or null as enum values; the declaration will be rejected"
            );
        }
        sdl.push_str(&format!("  {wire}\n"));
    }
    sdl.push('}');
    sdl
}

/// Whether GraphQL forbids `name` as an enum value.
pub fn is_reserved_enum_value(name: &str) -> bool {
    matches!(name, "true" | "false" | "null")
}

fn push_description(sdl: &mut String, comment: &str, indent: &str) {
    let escaped = comment.replace("\"\"\"", "\\\"\"\"");
    if escaped.contains('\n') {
        sdl.push_str(&format!("{indent}\"\"\"\n"));
        for line in escaped.lines() {
            sdl.push_str(&format!("{indent}{line}\n"));
        }
        sdl.push_str(&format!("{indent}\"\"\"\n"));
    } else {
        sdl.push_str(&format!("{indent}\"\"\"{escaped}\"\"\"\n"));
    }
}
