//! Compiles `proto/fixture/*.proto`, runs the generator over the descriptors
//! in every mode, and builds the prost types the generated code is included
//! next to. Everything lands in `OUT_DIR`, where `src/fixture.rs` includes it.
//!
//! The schemas are parsed with protox, so the build needs no protoc
//! installation.

use enumwire_core::render::json;
use enumwire_core::SchemaFile;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

const PROTO_ROOT: &str = "proto";
const SCHEMAS: &[&str] = &["fixture/enums.proto", "fixture/plain.proto"];
const PARAMETER: &str = "xml,json,gql,paths=source_relative";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={PROTO_ROOT}");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);

    let descriptors = protox::Compiler::new([PROTO_ROOT])?
        .include_imports(true)
        .include_source_info(true)
        .open_files(SCHEMAS)?
        .file_descriptor_set();
    let targets: Vec<String> = SCHEMAS.iter().map(|name| name.to_string()).collect();

    let files = enumwire_core::generate(&descriptors.file, &targets, PARAMETER)?;

    let mut manifest = String::new();
    for file in &files {
        let path = out_dir.join(&file.name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.content)?;
        manifest.push_str(&file.name);
        manifest.push('\n');
    }
    fs::write(out_dir.join("manifest.txt"), manifest)?;

    let mut config = prost_build::Config::new();
    config.type_attribute(".", "#[derive(serde::Serialize, serde::Deserialize)]");
    for descriptor in &descriptors.file {
        let schema = SchemaFile::from_descriptor(descriptor);
        for (proto_path, attribute) in json_field_attributes(&schema) {
            config.field_attribute(proto_path, attribute);
        }
    }
    config.compile_fds(descriptors)?;

    Ok(())
}

/// `#[serde(with = ...)]` for every enum field, keyed by its protobuf path.
fn json_field_attributes(schema: &SchemaFile) -> Vec<(String, String)> {
    let module = format!("crate::{}", schema.package().replace('.', "::"));

    schema
        .fields()
        .iter()
        .filter_map(|field| {
            let declaration = schema.enums().get(field.enum_index())?;
            let proto_path: String = std::iter::once(schema.package())
                .filter(|package| !package.is_empty())
                .chain(field.message_path().iter().map(String::as_str))
                .chain(std::iter::once(field.name()))
                .map(|part| format!(".{part}"))
                .collect();
            let adapter = format!("{module}::{}", json::adapter_module(declaration));
            let attribute = match field.shape().adapter_submodule() {
                None => format!("#[serde(with = \"{adapter}\")]"),
                Some(submodule) => {
                    format!("#[serde(default, with = \"{adapter}::{submodule}\")]")
                }
            };
            Some((proto_path, attribute))
        })
        .collect()
}
