#![allow(non_snake_case)]

use super::*;
use prost_types::{EnumDescriptorProto, EnumValueDescriptorProto, FileDescriptorProto};

fn colors_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("colors.proto".to_string()),
        package: Some("colors".to_string()),
        enum_type: vec![EnumDescriptorProto {
            name: Some("Color".to_string()),
            value: ["COLOR_RED", "COLOR_GREEN"]
                .iter()
                .zip(0..)
                .map(|(name, number)| EnumValueDescriptorProto {
                    name: Some(name.to_string()),
                    number: Some(number),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn request(parameter: &str) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: vec!["colors.proto".to_string()],
        parameter: Some(parameter.to_string()),
        proto_file: vec![colors_file()],
        ..Default::default()
    }
}

// respond tests

#[test]
fn respond___valid_request___files_in_mode_order() {
    let response = respond(&request("json,xml"));

    let names: Vec<&str> = response.file.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["colors.enums.json.rs", "colors.enums.xml.rs"]);
    assert_eq!(response.error, None);
}

#[test]
fn respond___any_request___advertises_proto3_optional() {
    let ok = respond(&request("gql"));
    let failed = respond(&request("yaml"));

    assert_eq!(ok.supported_features, Some(1));
    assert_eq!(failed.supported_features, Some(1));
}

#[test]
fn respond___bad_parameter___error_without_files() {
    let response = respond(&request("yaml"));

    assert!(response.file.is_empty());
    assert_eq!(
        response.error.as_deref(),
        Some("configuration error: unrecognized parameter \"yaml\"")
    );
}

#[test]
fn respond___missing_parameter___error_without_files() {
    let mut request = request("");
    request.parameter = None;

    let response = respond(&request);

    assert!(response.file.is_empty());
    assert!(response.error.is_some());
}

#[test]
fn respond___no_enums___empty_success() {
    let mut request = request("xml");
    request.proto_file[0].enum_type.clear();

    let response = respond(&request);

    assert!(response.file.is_empty());
    assert_eq!(response.error, None);
}

// run tests

#[test]
fn run___encoded_request___encoded_response() {
    let codec = ProtobufCodec::new();
    let input = codec.encode_request(&request("json")).unwrap();

    let output = run(&input).unwrap();
    let response = codec.decode_response(&output).unwrap();

    assert_eq!(response.file.len(), 1);
    assert!(response.file[0].content().contains("\"GREEN\""));
}

#[test]
fn run___garbage_input___decode_error() {
    let result = run(&[0xff, 0xff, 0xff]);

    assert!(matches!(result, Err(CodecError::Decode(_))));
}
