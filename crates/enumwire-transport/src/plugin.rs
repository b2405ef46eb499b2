//! One protoc plugin exchange: request in, response out.

use crate::codec::{CodecError, ProtobufCodec};
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};

/// Features advertised to protoc in every response
pub const SUPPORTED_FEATURES: u64 = Feature::Proto3Optional as u64;

/// Build the response for a decoded request.
///
/// Generation errors are reported in the response's `error` field with no
/// files, as protoc expects; they never abort the exchange.
pub fn respond(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    tracing::debug!(
        files = request.file_to_generate.len(),
        descriptors = request.proto_file.len(),
        parameter = request.parameter(),
        "received CodeGeneratorRequest"
    );

    match enumwire_core::generate(
        &request.proto_file,
        &request.file_to_generate,
        request.parameter(),
    ) {
        Ok(files) => CodeGeneratorResponse {
            error: None,
            supported_features: Some(SUPPORTED_FEATURES),
            file: files
                .into_iter()
                .map(|generated| File {
                    name: Some(generated.name),
                    content: Some(generated.content),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        },
        Err(err) => {
            tracing::error!(error = %err, "generation failed");
            CodeGeneratorResponse {
                error: Some(err.to_string()),
                supported_features: Some(SUPPORTED_FEATURES),
                file: Vec::new(),
                ..Default::default()
            }
        }
    }
}

/// Decode a request, build its response and encode it.
pub fn run(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let codec = ProtobufCodec::new();
    let request = codec.decode_request(input)?;
    let response = respond(&request);
    codec.encode_response(&response)
}

#[cfg(test)]
#[path = "plugin/plugin_tests.rs"]
mod plugin_tests;
