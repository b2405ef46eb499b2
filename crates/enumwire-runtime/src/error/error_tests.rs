#![allow(non_snake_case)]

use super::*;

#[test]
fn UnrecognizedWireValue___number___displays_bare_number() {
    let err = UnrecognizedWireValue::number("Color", 7);

    assert_eq!(err.to_string(), "unrecognized value 7 for enum Color");
}

#[test]
fn UnrecognizedWireValue___name___displays_quoted_name() {
    let err = UnrecognizedWireValue::name("Color", "PURPLE");

    assert_eq!(err.to_string(), "unrecognized value \"PURPLE\" for enum Color");
    assert_eq!(err.enum_name, "Color");
}
