//! Per-file enum tables built from protobuf descriptors.
//!
//! A [`SchemaFile`] is produced by a single walk over a
//! `FileDescriptorProto`. The walk records every enum declaration together
//! with its nesting path and precomputed [`WireTable`], and every message field
//! whose type is one of those enums. Renderers only ever read these tables.
//!
//! # Walk order
//!
//! File-scope enums come first, in declaration order. Messages are then
//! visited depth-first: a message's own enums before its nested messages.
//!
//! # XML attribute fields
//!
//! Protobuf has no notion of XML attributes, so a field opts in through its
//! source comment: a leading or trailing comment containing `xml:attr` binds
//! the field to an attribute instead of a child element.
//!
//! ```proto
//! message MessageWithAttribute {
//!   RootEnum field = 1; // xml:attr
//! }
//! ```
//!
//! # Field shapes
//!
//! prost stores an enum field as `i32`, `Option<i32>` (proto3 `optional` and
//! every proto2 `optional`) or `Vec<i32>` (`repeated`). Each recorded field
//! carries its [`FieldShape`] so the matching serde adapter can be bound.

use crate::naming::{flat_snake, flat_upper_snake, type_path};
use crate::wire::WireTable;
use heck::ToUpperCamelCase;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileOptions,
    SourceCodeInfo,
};
use std::collections::HashMap;

/// Comment marker that binds an enum field to an XML attribute
pub const XML_ATTRIBUTE_MARKER: &str = "xml:attr";

// Field numbers inside descriptor.proto, used to address source locations.
const FILE_MESSAGE_TYPE: i32 = 4;
const FILE_ENUM_TYPE: i32 = 5;
const MESSAGE_FIELD: i32 = 2;
const MESSAGE_NESTED_TYPE: i32 = 3;
const MESSAGE_ENUM_TYPE: i32 = 4;
const ENUM_VALUE: i32 = 2;

/// Declared output location of a schema file.
///
/// Parsed from the file's import-path option, written `path;ident`, `path`
/// (ident taken from the last path segment) or a bare `ident`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputHint {
    path: String,
    ident: String,
}

impl OutputHint {
    /// Parse an import-path option. Returns `None` for an empty option.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumwire_core::OutputHint;
    ///
    /// let hint = OutputHint::parse("example.com/gen/colors;colorspb").unwrap();
    /// assert_eq!(hint.path(), "example.com/gen/colors");
    /// assert_eq!(hint.ident(), "colorspb");
    ///
    /// let hint = OutputHint::parse("example.com/gen/colors").unwrap();
    /// assert_eq!(hint.ident(), "colors");
    ///
    /// assert!(OutputHint::parse("").is_none());
    /// ```
    pub fn parse(option: &str) -> Option<Self> {
        if option.is_empty() {
            return None;
        }

        let (path, ident) = match option.split_once(';') {
            Some((path, ident)) => (path, ident),
            None => match option.rsplit_once('/') {
                Some((_, last)) => (option, last),
                None => ("", option),
            },
        };

        Some(Self {
            path: path.to_string(),
            ident: ident.to_string(),
        })
    }

    /// Directory the generated files are placed under (may be empty)
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Override identifier declared after the delimiter, or inferred from the path
    pub fn ident(&self) -> &str {
        &self.ident
    }
}

/// A single declared enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    name: String,
    number: i32,
    comment: Option<String>,
}

impl EnumValue {
    /// Declared source identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared numeric tag (not used for marshalling)
    pub fn number(&self) -> i32 {
        self.number
    }

    /// Leading source comment, if any
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// An enum declaration with its nesting path and wire-name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    name: String,
    full_name: String,
    nesting: Vec<String>,
    values: Vec<EnumValue>,
    comment: Option<String>,
    wire: WireTable,
}

impl EnumDeclaration {
    /// Declared enum name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully-qualified protobuf name with leading dot (`.pkg.Outer.Name`)
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Enclosing message names, outermost first
    pub fn nesting(&self) -> &[String] {
        &self.nesting
    }

    /// Values in declaration order
    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    /// Leading source comment, if any
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Wire-name table for this enum
    pub fn wire(&self) -> &WireTable {
        &self.wire
    }

    /// Rust path of the prost type, relative to the package module
    pub fn rust_path(&self) -> String {
        type_path(&self.nesting, &self.name)
    }

    /// Flat snake_case key, unique per file (`outer__inner__name`)
    pub fn snake_key(&self) -> String {
        flat_snake(&self.nesting, &self.name)
    }

    /// Flat UPPER_SNAKE key, unique per file
    pub fn upper_key(&self) -> String {
        flat_upper_snake(&self.nesting, &self.name)
    }

    /// Name of the enum in a schema type system (`Outer_Inner_Name`)
    pub fn schema_type_name(&self) -> String {
        self.nesting
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// How an enum-typed field appears in XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlBinding {
    /// Child element whose text is the wire name (`<Field>DEF</Field>`)
    Element(String),

    /// Attribute whose value is the wire name (`field="DEF"`)
    Attribute(String),
}

impl XmlBinding {
    fn for_field(field_name: &str, attribute: bool) -> Self {
        if attribute {
            XmlBinding::Attribute(field_name.to_string())
        } else {
            XmlBinding::Element(field_name.to_upper_camel_case())
        }
    }

    /// The XML node name without any serde decoration
    pub fn node_name(&self) -> &str {
        match self {
            XmlBinding::Element(name) | XmlBinding::Attribute(name) => name,
        }
    }
}

/// How prost represents an enum-typed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldShape {
    /// `i32`
    Singular,

    /// `Option<i32>`
    Optional,

    /// `Vec<i32>`
    Repeated,
}

impl FieldShape {
    fn of(field: &FieldDescriptorProto, proto3: bool) -> Self {
        match field.label() {
            Label::Repeated => FieldShape::Repeated,
            _ if field.proto3_optional() => FieldShape::Optional,
            // Oneof members are plain `i32` payloads of the oneof enum.
            _ if field.oneof_index.is_some() => FieldShape::Singular,
            Label::Optional if !proto3 => FieldShape::Optional,
            _ => FieldShape::Singular,
        }
    }

    /// Submodule of an enum's serde adapter serving this shape, if any
    pub fn adapter_submodule(&self) -> Option<&'static str> {
        match self {
            FieldShape::Singular => None,
            FieldShape::Optional => Some("option"),
            FieldShape::Repeated => Some("vec"),
        }
    }
}

/// A message field whose type is an enum declared in the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumField {
    message_path: Vec<String>,
    name: String,
    enum_index: usize,
    shape: FieldShape,
    binding: XmlBinding,
}

impl EnumField {
    /// Enclosing message names, outermost first (the last one owns the field)
    pub fn message_path(&self) -> &[String] {
        &self.message_path
    }

    /// Declared field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the field's enum in [`SchemaFile::enums`]
    pub fn enum_index(&self) -> usize {
        self.enum_index
    }

    /// Rust representation of the field
    pub fn shape(&self) -> FieldShape {
        self.shape
    }

    /// XML element or attribute binding
    pub fn binding(&self) -> &XmlBinding {
        &self.binding
    }

    /// Flat snake_case key, unique per file (`message__field`)
    pub fn snake_key(&self) -> String {
        flat_snake(&self.message_path, &self.name)
    }
}

/// The enum table of one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    name: String,
    package: String,
    output_hint: Option<OutputHint>,
    enums: Vec<EnumDeclaration>,
    fields: Vec<EnumField>,
}

impl SchemaFile {
    /// Walk a file descriptor once and build its enum table.
    pub fn from_descriptor(file: &FileDescriptorProto) -> Self {
        let comments = Comments::new(file.source_code_info.as_ref());
        let output_hint = file
            .options
            .as_ref()
            .and_then(|options| OutputHint::parse(options.go_package()));

        let mut walker = Walker {
            package: file.package().to_string(),
            proto3: file.syntax() == "proto3",
            comments: &comments,
            enums: Vec::new(),
            pending: Vec::new(),
        };

        for (i, enum_type) in file.enum_type.iter().enumerate() {
            walker.push_enum(&[], enum_type, vec![FILE_ENUM_TYPE, i as i32]);
        }
        let mut scope = Vec::new();
        for (i, message) in file.message_type.iter().enumerate() {
            walker.visit_message(&mut scope, message, vec![FILE_MESSAGE_TYPE, i as i32]);
        }

        let fields = walker.resolve_fields();

        Self {
            name: file.name().to_string(),
            package: walker.package,
            output_hint,
            enums: walker.enums,
            fields,
        }
    }

    /// Start building a proto3 schema file by hand (descriptors are assembled underneath).
    pub fn builder(name: impl Into<String>) -> SchemaFileBuilder {
        SchemaFileBuilder {
            descriptor: FileDescriptorProto {
                name: Some(name.into()),
                syntax: Some("proto3".to_string()),
                ..Default::default()
            },
        }
    }

    /// Path-like file name as given to protoc
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Protobuf package (may be empty)
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Declared output location, if any
    pub fn output_hint(&self) -> Option<&OutputHint> {
        self.output_hint.as_ref()
    }

    /// Enum declarations in walk order
    pub fn enums(&self) -> &[EnumDeclaration] {
        &self.enums
    }

    /// Enum-typed fields of the file's messages
    pub fn fields(&self) -> &[EnumField] {
        &self.fields
    }

    /// Whether the file declares at least one enum
    pub fn has_enums(&self) -> bool {
        !self.enums.is_empty()
    }
}

/// Builder assembling a `FileDescriptorProto` for [`SchemaFile`].
#[derive(Debug, Clone)]
pub struct SchemaFileBuilder {
    descriptor: FileDescriptorProto,
}

impl SchemaFileBuilder {
    /// Set the protobuf package
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.descriptor.package = Some(package.into());
        self
    }

    /// Set the import-path option carrying the output location
    pub fn output_hint(mut self, option: impl Into<String>) -> Self {
        self.descriptor.options = Some(FileOptions {
            go_package: Some(option.into()),
            ..Default::default()
        });
        self
    }

    /// Add a file-scope enum
    pub fn enum_type(mut self, enum_type: EnumDescriptorProto) -> Self {
        self.descriptor.enum_type.push(enum_type);
        self
    }

    /// Add a top-level message
    pub fn message(mut self, message: DescriptorProto) -> Self {
        self.descriptor.message_type.push(message);
        self
    }

    /// The assembled descriptor
    pub fn descriptor(&self) -> &FileDescriptorProto {
        &self.descriptor
    }

    /// Walk the assembled descriptor
    pub fn build(self) -> SchemaFile {
        SchemaFile::from_descriptor(&self.descriptor)
    }
}

struct PendingField<'a> {
    message_path: Vec<String>,
    field: &'a FieldDescriptorProto,
    shape: FieldShape,
    attribute: bool,
}

struct Walker<'c, 'd> {
    package: String,
    proto3: bool,
    comments: &'c Comments,
    enums: Vec<EnumDeclaration>,
    pending: Vec<PendingField<'d>>,
}

impl<'d> Walker<'_, 'd> {
    fn push_enum(&mut self, nesting: &[String], enum_type: &EnumDescriptorProto, path: Vec<i32>) {
        let name = enum_type.name().to_string();
        let values: Vec<EnumValue> = enum_type
            .value
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let mut value_path = path.clone();
                value_path.extend([ENUM_VALUE, i as i32]);
                EnumValue {
                    name: value.name().to_string(),
                    number: value.number(),
                    comment: self.comments.leading(&value_path),
                }
            })
            .collect();
        let wire = WireTable::new(&name, values.iter().map(EnumValue::name));
        let full_name = self.full_name(nesting, &name);
        let comment = self.comments.leading(&path);

        self.enums.push(EnumDeclaration {
            full_name,
            nesting: nesting.to_vec(),
            comment,
            name,
            values,
            wire,
        });
    }

    fn visit_message(
        &mut self,
        scope: &mut Vec<String>,
        message: &'d DescriptorProto,
        path: Vec<i32>,
    ) {
        scope.push(message.name().to_string());

        for (i, field) in message.field.iter().enumerate() {
            if field.r#type() != Type::Enum {
                continue;
            }
            let mut field_path = path.clone();
            field_path.extend([MESSAGE_FIELD, i as i32]);
            self.pending.push(PendingField {
                message_path: scope.clone(),
                field,
                shape: FieldShape::of(field, self.proto3),
                attribute: self.comments.mentions(&field_path, XML_ATTRIBUTE_MARKER),
            });
        }

        for (i, enum_type) in message.enum_type.iter().enumerate() {
            let mut enum_path = path.clone();
            enum_path.extend([MESSAGE_ENUM_TYPE, i as i32]);
            let nesting = scope.clone();
            self.push_enum(&nesting, enum_type, enum_path);
        }

        for (i, nested) in message.nested_type.iter().enumerate() {
            let mut nested_path = path.clone();
            nested_path.extend([MESSAGE_NESTED_TYPE, i as i32]);
            self.visit_message(scope, nested, nested_path);
        }

        scope.pop();
    }

    fn full_name(&self, nesting: &[String], name: &str) -> String {
        let mut full_name = String::new();
        for part in std::iter::once(self.package.as_str())
            .filter(|p| !p.is_empty())
            .chain(nesting.iter().map(String::as_str))
            .chain(std::iter::once(name))
        {
            full_name.push('.');
            full_name.push_str(part);
        }
        full_name
    }

    fn resolve_fields(&mut self) -> Vec<EnumField> {
        let pending = std::mem::take(&mut self.pending);
        pending
            .into_iter()
            .filter_map(|pending| {
                let type_name = pending.field.type_name();
                let Some(enum_index) = self.enums.iter().position(|e| e.full_name == type_name)
                else {
                    tracing::debug!(
                        field = pending.field.name(),
                        type_name,
                        "enum declared in another file, no field binding emitted"
                    );
                    return None;
                };
                let name = pending.field.name().to_string();
                Some(EnumField {
                    binding: XmlBinding::for_field(&name, pending.attribute),
                    message_path: pending.message_path,
                    name,
                    enum_index,
                    shape: pending.shape,
                })
            })
            .collect()
    }
}

/// Source comments indexed by descriptor path.
struct Comments {
    by_path: HashMap<Vec<i32>, (Option<String>, Option<String>)>,
}

impl Comments {
    fn new(info: Option<&SourceCodeInfo>) -> Self {
        let by_path = info
            .map(|info| {
                info.location
                    .iter()
                    .map(|location| {
                        (
                            location.path.clone(),
                            (
                                location.leading_comments.clone(),
                                location.trailing_comments.clone(),
                            ),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { by_path }
    }

    fn leading(&self, path: &[i32]) -> Option<String> {
        let (leading, _) = self.by_path.get(path)?;
        leading.as_deref().and_then(clean_comment)
    }

    fn mentions(&self, path: &[i32], marker: &str) -> bool {
        self.by_path.get(path).is_some_and(|(leading, trailing)| {
            [leading, trailing]
                .into_iter()
                .flatten()
                .any(|comment| comment.contains(marker))
        })
    }
}

/// Trim every line of a comment and drop blank lines at either end.
fn clean_comment(raw: &str) -> Option<String> {
    let lines: Vec<&str> = raw.lines().map(str::trim).collect();
    let start = lines.iter().position(|l| !l.is_empty())?;
    let end = lines.iter().rposition(|l| !l.is_empty())?;
    Some(lines[start..=end].join("\n"))
}
