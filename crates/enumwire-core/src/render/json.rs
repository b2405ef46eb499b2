//! JSON renderer: enum values travel as string scalars holding their wire names.
//!
//! Object keys stay the business of the surrounding serde derive; this only
//! supplies the value conversion.

use super::codec::{Codec, render_enum};
use crate::schema::{EnumDeclaration, SchemaFile};

pub(crate) const JSON: Codec = Codec {
    trait_name: "JsonEnum",
    to_name: "json_name",
    from_name: "from_json_name",
    runtime_module: "json",
    module_suffix: "json",
    label: "JSON",
};

pub(crate) fn render_body(file: &SchemaFile, code: &mut String) {
    for declaration in file.enums() {
        render_enum(&JSON, declaration, code);
    }
}

/// Name of the serde adapter module generated for an enum.
///
/// Build scripts use it to point `#[serde(with = ...)]` at the module.
pub fn adapter_module(declaration: &EnumDeclaration) -> String {
    JSON.adapter_module(declaration)
}
