//! Descriptor fixtures shared by unit tests

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::source_code_info::Location;
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileOptions, SourceCodeInfo,
};

pub fn enum_type(name: &str, values: &[&str]) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some(name.to_string()),
        value: values
            .iter()
            .enumerate()
            .map(|(i, value)| EnumValueDescriptorProto {
                name: Some(value.to_string()),
                number: Some(i as i32),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub fn enum_field(name: &str, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(1),
        label: Some(Label::Optional as i32),
        r#type: Some(Type::Enum as i32),
        type_name: Some(type_name.to_string()),
        ..Default::default()
    }
}

pub fn string_field(name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(2),
        label: Some(Label::Optional as i32),
        r#type: Some(Type::String as i32),
        ..Default::default()
    }
}

pub fn message(
    name: &str,
    fields: Vec<FieldDescriptorProto>,
    enums: Vec<EnumDescriptorProto>,
    nested: Vec<DescriptorProto>,
) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        enum_type: enums,
        nested_type: nested,
        ..Default::default()
    }
}

pub fn location(path: &[i32], leading: Option<&str>, trailing: Option<&str>) -> Location {
    Location {
        path: path.to_vec(),
        leading_comments: leading.map(str::to_string),
        trailing_comments: trailing.map(str::to_string),
        ..Default::default()
    }
}

pub fn file(name: &str) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

pub fn with_output_hint(mut file: FileDescriptorProto, option: &str) -> FileDescriptorProto {
    file.options = Some(FileOptions {
        go_package: Some(option.to_string()),
        ..Default::default()
    });
    file
}

/// The message/enum layout used across the generator tests:
///
/// ```proto
/// syntax = "proto3";
/// package fixture;
///
/// // Top-level enum.
/// enum RootEnum { ABC = 0; DEF = 1; }
/// enum ScreamingSnakeWithPrefix {
///   SCREAMING_SNAKE_WITH_PREFIX_ABC = 0;
///   SCREAMING_SNAKE_WITH_PREFIX_DEF = 1;
/// }
/// message MessageWithRootEnum { RootEnum field = 1; }
/// message MessageWithNestedEnum {
///   enum Nested { ABC = 0; DEF = 1; }
///   Nested field = 1;
/// }
/// message MessageWithDeeplyNestedEnum {
///   message Outer { message Inner { enum Deeply { ABC = 0; DEF = 1; } } }
///   Outer.Inner.Deeply field = 1;
/// }
/// message ScreamingSnakeWithPrefixEnum { ScreamingSnakeWithPrefix field = 1; }
/// message MessageWithAttribute {
///   RootEnum field = 1; // xml:attr
///   string note = 2;
/// }
/// ```
pub fn fixture_file() -> FileDescriptorProto {
    let deeply = message(
        "Outer",
        vec![],
        vec![],
        vec![message(
            "Inner",
            vec![],
            vec![enum_type("Deeply", &["ABC", "DEF"])],
            vec![],
        )],
    );

    FileDescriptorProto {
        name: Some("fixture/enums.proto".to_string()),
        package: Some("fixture".to_string()),
        syntax: Some("proto3".to_string()),
        enum_type: vec![
            enum_type("RootEnum", &["ABC", "DEF"]),
            enum_type(
                "ScreamingSnakeWithPrefix",
                &[
                    "SCREAMING_SNAKE_WITH_PREFIX_ABC",
                    "SCREAMING_SNAKE_WITH_PREFIX_DEF",
                ],
            ),
        ],
        message_type: vec![
            message(
                "MessageWithRootEnum",
                vec![enum_field("field", ".fixture.RootEnum")],
                vec![],
                vec![],
            ),
            message(
                "MessageWithNestedEnum",
                vec![enum_field("field", ".fixture.MessageWithNestedEnum.Nested")],
                vec![enum_type("Nested", &["ABC", "DEF"])],
                vec![],
            ),
            message(
                "MessageWithDeeplyNestedEnum",
                vec![enum_field(
                    "field",
                    ".fixture.MessageWithDeeplyNestedEnum.Outer.Inner.Deeply",
                )],
                vec![],
                vec![deeply],
            ),
            message(
                "ScreamingSnakeWithPrefixEnum",
                vec![enum_field("field", ".fixture.ScreamingSnakeWithPrefix")],
                vec![],
                vec![],
            ),
            message(
                "MessageWithAttribute",
                vec![
                    enum_field("field", ".fixture.RootEnum"),
                    string_field("note"),
                ],
                vec![],
                vec![],
            ),
        ],
        source_code_info: Some(SourceCodeInfo {
            location: vec![
                location(&[5, 0], Some(" Top-level enum.\n"), None),
                location(&[4, 4, 2, 0], None, Some(" xml:attr\n")),
            ],
        }),
        ..Default::default()
    }
}
