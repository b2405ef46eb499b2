//! The `fixture` protobuf package: prost-build output for
//! `proto/fixture/*.proto`, with JSON serde attributes on every enum field,
//! followed by the generated XML, JSON and GraphQL code.

include!(concat!(env!("OUT_DIR"), "/fixture.rs"));

include!(concat!(env!("OUT_DIR"), "/fixture/enums.enums.xml.rs"));
include!(concat!(env!("OUT_DIR"), "/fixture/enums.enums.json.rs"));
include!(concat!(env!("OUT_DIR"), "/fixture/enums.enums.gql.rs"));
