//! XML views of the fixture messages.
//!
//! Each enum field goes through its generated binding module; the serde
//! rename matches that module's `XML_NODE`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageWithRootEnum {
    #[serde(
        rename = "Field",
        with = "crate::fixture::message_with_root_enum__field_xml_field"
    )]
    pub field: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageWithNestedEnum {
    #[serde(
        rename = "Field",
        with = "crate::fixture::message_with_nested_enum__field_xml_field"
    )]
    pub field: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageWithDeeplyNestedEnum {
    #[serde(
        rename = "Field",
        with = "crate::fixture::message_with_deeply_nested_enum__field_xml_field"
    )]
    pub field: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreamingSnakeWithPrefixEnum {
    #[serde(
        rename = "Field",
        with = "crate::fixture::screaming_snake_with_prefix_enum__field_xml_field"
    )]
    pub field: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageWithAttribute {
    #[serde(
        rename = "@field",
        with = "crate::fixture::message_with_attribute__field_xml_field"
    )]
    pub field: i32,

    #[serde(rename = "Note")]
    pub note: String,
}

impl From<&crate::fixture::MessageWithAttribute> for MessageWithAttribute {
    fn from(message: &crate::fixture::MessageWithAttribute) -> Self {
        Self {
            field: message.field,
            note: message.note.clone(),
        }
    }
}

/// `maybe` is omitted when unset; `many` repeats its element per value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageWithEnumShapes {
    #[serde(
        rename = "Maybe",
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::fixture::message_with_enum_shapes__maybe_xml_field"
    )]
    pub maybe: Option<i32>,

    #[serde(
        rename = "Many",
        default,
        with = "crate::fixture::message_with_enum_shapes__many_xml_field"
    )]
    pub many: Vec<i32>,
}

impl From<&crate::fixture::MessageWithEnumShapes> for MessageWithEnumShapes {
    fn from(message: &crate::fixture::MessageWithEnumShapes) -> Self {
        Self {
            maybe: message.maybe,
            many: message.many.clone(),
        }
    }
}
