//! Output aggregation: runs every requested (mode, file) pair.

use crate::config::RunConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::naming::output_file_name;
use crate::render::Renderer;
use crate::schema::SchemaFile;
use prost_types::FileDescriptorProto;
use std::collections::{HashMap, HashSet};

/// One generated output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path relative to the protoc output directory
    pub name: String,

    /// Full generated source text
    pub content: String,
}

/// Generate code for `files_to_generate`, looking descriptors up in `descriptors`.
///
/// Modes form the outer loop (parameter order) and files the inner loop
/// (request order). Files without enums are skipped. When two pairs resolve
/// to the same output name the first one wins.
///
/// Errors are fatal: either every file is returned or none is.
pub fn generate(
    descriptors: &[FileDescriptorProto],
    files_to_generate: &[String],
    parameter: &str,
) -> GenerateResult<Vec<GeneratedFile>> {
    let config = RunConfig::parse(parameter)?;
    generate_with_config(descriptors, files_to_generate, &config)
}

/// Same as [`generate`] with an already-parsed configuration.
pub fn generate_with_config(
    descriptors: &[FileDescriptorProto],
    files_to_generate: &[String],
    config: &RunConfig,
) -> GenerateResult<Vec<GeneratedFile>> {
    let by_name: HashMap<&str, &FileDescriptorProto> = descriptors
        .iter()
        .map(|descriptor| (descriptor.name(), descriptor))
        .collect();

    let schemas = files_to_generate
        .iter()
        .map(|name| {
            by_name
                .get(name.as_str())
                .map(|descriptor| SchemaFile::from_descriptor(descriptor))
                .ok_or_else(|| GenerateError::UnknownFile(name.clone()))
        })
        .collect::<GenerateResult<Vec<_>>>()?;

    let mut emitted = HashSet::new();
    let mut output = Vec::new();

    for &mode in config.modes() {
        let renderer = Renderer::for_mode(mode);

        for schema in &schemas {
            let Some(content) = renderer.render(schema) else {
                tracing::debug!(file = schema.name(), %mode, "no enums, nothing to generate");
                continue;
            };

            let name = output_file_name(schema, mode, config.source_relative());
            if !emitted.insert(name.clone()) {
                tracing::warn!(
                    file = schema.name(),
                    output = %name,
                    %mode,
                    "output already generated in this run, skipping"
                );
                continue;
            }

            tracing::info!(file = schema.name(), output = %name, %mode, "generated");
            output.push(GeneratedFile { name, content });
        }
    }

    Ok(output)
}
