//! Protobuf codec for the protoc plugin messages

use prost::Message;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use thiserror::Error;

/// Errors that can occur while decoding a request or encoding a response
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("failed to encode CodeGeneratorResponse: {0}")]
    Encode(#[from] prost::EncodeError),
}

/// Binary protobuf codec for `CodeGeneratorRequest`/`CodeGeneratorResponse`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtobufCodec;

impl ProtobufCodec {
    /// Create a new codec
    pub fn new() -> Self {
        Self
    }

    /// Decode a request as written by protoc
    pub fn decode_request(&self, data: &[u8]) -> Result<CodeGeneratorRequest, CodecError> {
        CodeGeneratorRequest::decode(data).map_err(Into::into)
    }

    /// Encode a response for protoc
    pub fn encode_response(&self, response: &CodeGeneratorResponse) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::with_capacity(response.encoded_len());
        response.encode(&mut buf)?;
        Ok(buf)
    }

    /// Encode a request, the inverse of [`decode_request`](Self::decode_request)
    pub fn encode_request(&self, request: &CodeGeneratorRequest) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::with_capacity(request.encoded_len());
        request.encode(&mut buf)?;
        Ok(buf)
    }

    /// Decode a response, the inverse of [`encode_response`](Self::encode_response)
    pub fn decode_response(&self, data: &[u8]) -> Result<CodeGeneratorResponse, CodecError> {
        CodeGeneratorResponse::decode(data).map_err(Into::into)
    }
}
