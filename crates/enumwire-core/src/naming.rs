//! Naming convention utilities for code generation.
//!
//! This module converts schema names into the identifiers used by generated
//! code and computes output file names.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `ScreamingSnake` | [`upper_snake`] | `SCREAMING_SNAKE` |
//! | `MessageWithNestedEnum` | [`module_ident`] | `message_with_nested_enum` |
//! | `nested` | [`type_ident`] | `Nested` |
//! | `["Outer"]`, `Inner` | [`type_path`] | `outer::Inner` |
//! | `["Status"]`, `Code` | [`flat_snake`] | `status__code` |
//!
//! Module and type identifiers follow the layout `prost-build` uses for nested
//! types, so generated code can name the prost enum types directly.

use crate::config::Mode;
use crate::schema::SchemaFile;
use heck::{ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// Schema source extensions stripped before the mode suffix is appended
const SCHEMA_EXTENSIONS: &[&str] = &[".proto", ".protodevel"];

/// Rust keywords that must be written as raw identifiers
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Identifiers that cannot be raw identifiers and get a trailing underscore
const RESERVED_PATH_KEYWORDS: &[&str] = &["self", "super", "crate", "Self"];

/// Convert any identifier to UPPER_SNAKE_CASE.
///
/// This is the single case conversion used for wire-name prefixes, applied
/// alike to enum names and enum value names.
///
/// # Examples
///
/// ```
/// use enumwire_core::naming::upper_snake;
///
/// assert_eq!(upper_snake("ScreamingSnakeWithPrefix"), "SCREAMING_SNAKE_WITH_PREFIX");
/// assert_eq!(upper_snake("HTTPStatus"), "HTTP_STATUS");
/// assert_eq!(upper_snake("ALREADY_UPPER"), "ALREADY_UPPER");
/// ```
pub fn upper_snake(s: &str) -> String {
    s.to_shouty_snake_case()
}

/// Module identifier for an enclosing message, as prost names it.
///
/// # Examples
///
/// ```
/// use enumwire_core::naming::module_ident;
///
/// assert_eq!(module_ident("MessageWithNestedEnum"), "message_with_nested_enum");
/// assert_eq!(module_ident("Type"), "r#type");
/// ```
pub fn module_ident(message_name: &str) -> String {
    escape_keyword(message_name.to_snake_case())
}

/// Type identifier for an enum, as prost names it.
pub fn type_ident(enum_name: &str) -> String {
    escape_keyword(enum_name.to_upper_camel_case())
}

/// Relative Rust path of an enum type from its nesting path.
///
/// # Examples
///
/// ```
/// use enumwire_core::naming::type_path;
///
/// assert_eq!(type_path(&[], "RootEnum"), "RootEnum");
/// assert_eq!(
///     type_path(&["MessageWithDeeplyNestedEnum".to_string(), "Inner".to_string()], "Deeply"),
///     "message_with_deeply_nested_enum::inner::Deeply"
/// );
/// ```
pub fn type_path(nesting: &[String], enum_name: &str) -> String {
    nesting
        .iter()
        .map(|message| module_ident(message))
        .chain(std::iter::once(type_ident(enum_name)))
        .collect::<Vec<_>>()
        .join("::")
}

/// Separator between nesting levels in flat names.
///
/// `heck` never emits a double underscore, so `Status.Code` (`status__code`)
/// cannot collide with a sibling `StatusCode` (`status_code`).
pub const NESTING_SEPARATOR: &str = "__";

/// Flat snake_case name for a nested item, used for generated helper modules.
///
/// Keywords are not escaped here because callers always append a suffix.
///
/// # Examples
///
/// ```
/// use enumwire_core::naming::flat_snake;
///
/// assert_eq!(flat_snake(&[], "StatusCode"), "status_code");
/// assert_eq!(flat_snake(&["Status".to_string()], "Code"), "status__code");
/// ```
pub fn flat_snake(nesting: &[String], name: &str) -> String {
    nesting
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(name))
        .map(|part| part.to_snake_case())
        .collect::<Vec<_>>()
        .join(NESTING_SEPARATOR)
}

/// Flat UPPER_SNAKE name for a nested item, used for generated constants.
pub fn flat_upper_snake(nesting: &[String], name: &str) -> String {
    flat_snake(nesting, name).to_uppercase()
}

/// Compute the output file name for a schema file in a given mode.
///
/// The schema extension is replaced by the mode suffix. Unless
/// `source_relative` is set, a file that declares an output path is
/// relocated: only its base name is kept, joined under that path.
///
/// # Examples
///
/// ```
/// use enumwire_core::{Mode, SchemaFile, naming::output_file_name};
///
/// let file = SchemaFile::builder("api/v1/colors.proto")
///     .output_hint("example.com/gen/colors;colorspb")
///     .build();
///
/// assert_eq!(
///     output_file_name(&file, Mode::Json, false),
///     "example.com/gen/colors/colors.enums.json.rs"
/// );
/// assert_eq!(
///     output_file_name(&file, Mode::Json, true),
///     "api/v1/colors.enums.json.rs"
/// );
/// ```
pub fn output_file_name(file: &SchemaFile, mode: Mode, source_relative: bool) -> String {
    let name = file.name();
    let stem = SCHEMA_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name);
    let relative = format!("{stem}{}", mode.file_suffix());

    if source_relative {
        return relative;
    }

    match file.output_hint().map(|hint| hint.path()) {
        Some(path) if !path.is_empty() => {
            let base = relative.rsplit('/').next().unwrap_or(&relative);
            match clean_path(path) {
                dir if dir.is_empty() => base.to_string(),
                dir if dir == "/" => format!("/{base}"),
                dir => format!("{dir}/{base}"),
            }
        }
        _ => relative,
    }
}

/// Lexically clean a slash-separated path.
///
/// Empty and `.` segments are dropped and `..` removes the segment before
/// it. A path that cleans to nothing yields an empty string.
///
/// # Examples
///
/// ```
/// use enumwire_core::naming::clean_path;
///
/// assert_eq!(clean_path("./gen//colors/"), "gen/colors");
/// assert_eq!(clean_path("gen/old/../colors"), "gen/colors");
/// assert_eq!(clean_path("../shared"), "../shared");
/// assert_eq!(clean_path("."), "");
/// ```
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Base name of a schema file without directory or extension.
pub fn file_stem(name: &str) -> &str {
    let base = name.rsplit('/').next().unwrap_or(name);
    SCHEMA_EXTENSIONS
        .iter()
        .find_map(|ext| base.strip_suffix(ext))
        .unwrap_or(base)
}

fn escape_keyword(ident: String) -> String {
    if RESERVED_PATH_KEYWORDS.contains(&ident.as_str()) {
        format!("{ident}_")
    } else if RUST_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{ident}")
    } else {
        ident
    }
}
