//! enumwire-core - Generation engine for enum wire names
//!
//! Turns compiled protobuf descriptors into Rust source that marshals enum
//! values to and from XML, JSON and GraphQL using stable wire names:
//! - [`RunConfig`] parses the protoc parameter string into requested [`Mode`]s
//! - [`SchemaFile`] is the per-file table built by one descriptor walk
//! - [`WireTable`] maps declared enum value names to wire names and back
//! - [`Renderer`] emits the code for one mode
//! - [`generate`] drives everything and returns the [`GeneratedFile`]s
//!
//! # Example
//!
//! ```
//! use enumwire_core::generate;
//! use prost_types::{EnumDescriptorProto, EnumValueDescriptorProto, FileDescriptorProto};
//!
//! let file = FileDescriptorProto {
//!     name: Some("colors.proto".into()),
//!     enum_type: vec![EnumDescriptorProto {
//!         name: Some("Color".into()),
//!         value: vec![EnumValueDescriptorProto {
//!             name: Some("COLOR_RED".into()),
//!             number: Some(0),
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let files = generate(&[file], &["colors.proto".to_string()], "json").unwrap();
//! assert_eq!(files[0].name, "colors.enums.json.rs");
//! assert!(files[0].content.contains("\"RED\""));
//! ```

mod config;
mod error;
mod generator;
pub mod naming;
pub mod render;
pub mod schema;
mod wire;

pub use config::{Mode, RunConfig};
pub use error::{GenerateError, GenerateResult};
pub use generator::{GeneratedFile, generate, generate_with_config};
pub use render::Renderer;
pub use schema::{
    EnumDeclaration, EnumField, EnumValue, FieldShape, OutputHint, SchemaFile, XmlBinding,
};
pub use wire::WireTable;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        GenerateError, GenerateResult, GeneratedFile, Mode, Renderer, RunConfig, SchemaFile,
        WireTable, generate,
    };
}

#[cfg(test)]
mod test_support;
