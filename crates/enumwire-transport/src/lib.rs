//! enumwire-transport - protoc plugin protocol layer
//!
//! This crate provides:
//! - [`ProtobufCodec`] for decoding `CodeGeneratorRequest` and encoding
//!   `CodeGeneratorResponse`
//! - [`respond`] to turn a request into a response using `enumwire-core`
//! - [`run`] for the whole byte-level exchange

mod codec;
mod plugin;

pub use codec::{CodecError, ProtobufCodec};
pub use plugin::{SUPPORTED_FEATURES, respond, run};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CodecError, ProtobufCodec, respond, run};
}
