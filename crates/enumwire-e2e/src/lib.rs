//! enumwire-e2e - Generated code, compiled and exercised
//!
//! `build.rs` compiles `proto/fixture/*.proto`, runs the generator over the
//! descriptors in every mode, and includes the output here next to the
//! prost-build types for the same schema:
//! - [`fixture`] holds the prost message and enum types plus the generated
//!   XML, JSON and GraphQL code
//! - [`xml_documents`] maps the messages onto XML documents through the
//!   generated field bindings
//! - [`GENERATED_FILES`] lists every file the generator produced

pub mod fixture;
pub mod xml_documents;

/// Output names from the build-time generator run, one per line
pub const GENERATED_FILES: &str = include_str!(concat!(env!("OUT_DIR"), "/manifest.txt"));

/// Iterate the names in [`GENERATED_FILES`]
pub fn generated_files() -> impl Iterator<Item = &'static str> {
    GENERATED_FILES.lines().filter(|line| !line.is_empty())
}
