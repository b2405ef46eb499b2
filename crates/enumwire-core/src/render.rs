//! Mode renderers.
//!
//! One [`Renderer`] variant per [`Mode`]. Each turns a [`SchemaFile`] into
//! Rust source, or `None` when the file declares no enums.
//!
//! # Architecture
//!
//! ```text
//! SchemaFile ──┬─→ [xml]  → impl XmlEnum + serde adapters + field bindings
//!              ├─→ [json] → impl JsonEnum + serde adapters
//!              └─→ [gql]  → GraphQL enum declarations as string constants
//! ```
//!
//! XML and JSON share [`codec`]'s enum rendering and differ only in the
//! runtime trait they implement.
//!
//! Generated code is meant to be `include!`d in the module holding the prost
//! output for the same file. It names enum types by their prost paths and
//! links against `enumwire-runtime`.

mod codec;
pub mod gql;
pub mod json;
pub mod xml;

use crate::config::Mode;
use crate::naming::NESTING_SEPARATOR;
use crate::schema::SchemaFile;

/// Name of the generator as written in generated file headers
pub const GENERATOR_NAME: &str = "protoc-gen-enumwire";

/// Closed set of renderers, one per mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Xml,
    Json,
    Gql,
}

impl Renderer {
    /// The renderer responsible for a mode
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Xml => Renderer::Xml,
            Mode::Json => Renderer::Json,
            Mode::Gql => Renderer::Gql,
        }
    }

    /// The mode this renderer produces
    pub fn mode(self) -> Mode {
        match self {
            Renderer::Xml => Mode::Xml,
            Renderer::Json => Mode::Json,
            Renderer::Gql => Mode::Gql,
        }
    }

    /// Render a schema file. Returns `None` when there is nothing to generate.
    pub fn render(self, file: &SchemaFile) -> Option<String> {
        if !file.has_enums() {
            return None;
        }

        let mut code = file_header(file, self.mode());
        match self {
            Renderer::Xml => xml::render_body(file, &mut code),
            Renderer::Json => json::render_body(file, &mut code),
            Renderer::Gql => gql::render_body(file, &mut code),
        }
        Some(code)
    }
}

/// Header written at the top of every generated file.
fn file_header(file: &SchemaFile, mode: Mode) -> String {
    let mut code = String::new();
    code.push_str(&format!(
        "// @generated by {GENERATOR_NAME}. DO NOT EDIT.\n"
    ));
    code.push_str(&format!("// source: {}\n", file.name()));
    code.push_str(&format!("// mode: {mode}\n"));
    code
}

/// Open a `pub mod`. Flat names of nested items contain `__`, which the
/// `non_snake_case` lint rejects, so those modules carry an allow.
pub(crate) fn open_module(code: &mut String, name: &str) {
    if name.contains(NESTING_SEPARATOR) {
        code.push_str("#[allow(non_snake_case)]\n");
    }
    code.push_str(&format!("pub mod {name} {{\n"));
}

/// Rust string literal for arbitrary text.
///
/// `Debug` escaping of `str` is valid Rust literal syntax.
pub(crate) fn str_literal(s: &str) -> String {
    format!("{s:?}")
}

/// Rust raw string literal, with enough `#`s to enclose the text.
pub(crate) fn raw_str_literal(s: &str) -> String {
    let mut hashes = 1;
    while s.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }
    let fence = "#".repeat(hashes);
    format!("r{fence}\"{s}\"{fence}")
}
