#![allow(non_snake_case)]

use super::*;

#[test]
fn GenerateError___configuration___displays_message() {
    let err = GenerateError::configuration("no parameter provided");

    assert_eq!(err.to_string(), "configuration error: no parameter provided");
}

#[test]
fn GenerateError___unsupported_mode___quotes_token() {
    let err = GenerateError::UnsupportedMode("yaml".into());

    assert_eq!(err.to_string(), "unsupported mode: \"yaml\"");
}

#[test]
fn GenerateError___unknown_file___names_file() {
    let err = GenerateError::UnknownFile("missing.proto".into());

    assert_eq!(
        err.to_string(),
        "file to generate not found in request: missing.proto"
    );
}
