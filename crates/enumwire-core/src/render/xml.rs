//! XML renderer: enum values travel as element text or attribute values.
//!
//! Besides the per-enum codec, every enum field of the file's messages gets a
//! binding module recording whether the field is an element or an attribute
//! and re-exporting the enum's serde adapter for the field's shape.

use super::codec::{Codec, render_enum};
use super::{open_module, str_literal};
use crate::schema::{EnumField, SchemaFile, XmlBinding};

pub(crate) const XML: Codec = Codec {
    trait_name: "XmlEnum",
    to_name: "xml_name",
    from_name: "from_xml_name",
    runtime_module: "xml",
    module_suffix: "xml",
    label: "XML",
};

pub(crate) fn render_body(file: &SchemaFile, code: &mut String) {
    for declaration in file.enums() {
        render_enum(&XML, declaration, code);
    }
    for field in file.fields() {
        render_field_binding(file, field, code);
    }
}

/// Name of the binding module generated for a field
pub fn field_module(field: &EnumField) -> String {
    format!("{}_xml_field", field.snake_key())
}

fn render_field_binding(file: &SchemaFile, field: &EnumField, code: &mut String) {
    let Some(declaration) = file.enums().get(field.enum_index()) else {
        return;
    };

    let (node, kind) = match field.binding() {
        XmlBinding::Element(name) => (format!("Element({})", str_literal(name)), "element"),
        XmlBinding::Attribute(name) => (format!("Attribute({})", str_literal(name)), "attribute"),
    };

    code.push('\n');
    code.push_str(&format!(
        "/// `{}.{}` travels as the XML {} `{}`.\n",
        field.message_path().join("."),
        field.name(),
        kind,
        field.binding().node_name()
    ));
    open_module(code, &field_module(field));
    code.push_str(&format!(
        "    pub const XML_NODE: ::enumwire_runtime::XmlNode = ::enumwire_runtime::XmlNode::{node};\n"
    ));
    code.push('\n');
    let adapter = match field.shape().adapter_submodule() {
        Some(submodule) => format!("{}::{submodule}", XML.adapter_module(declaration)),
        None => XML.adapter_module(declaration),
    };
    code.push_str(&format!(
        "    pub use super::{adapter}::{{deserialize, serialize}};\n"
    ));
    code.push_str("}\n");
}
