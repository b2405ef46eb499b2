//! enumwire-runtime - Support code for generated enum wire-name codecs
//!
//! Code produced by `protoc-gen-enumwire` implements the traits defined here
//! for prost enum types and delegates its serde adapters to the generic
//! functions in [`json`] and [`xml`]:
//! - [`JsonEnum`] / [`XmlEnum`] map enum values to wire names and back
//! - [`json::serialize`] / [`json::deserialize`] (and the [`xml`] pair) adapt
//!   the `i32` fields prost generates for enums; the `option` and `vec`
//!   submodules cover `Option<i32>` and `Vec<i32>` fields
//! - [`XmlNode`] records whether a field travels as an element or attribute
//! - [`UnrecognizedWireValue`] is reported for unknown numbers or names
//!
//! # Example
//!
//! ```
//! use enumwire_runtime::JsonEnum;
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Color {
//!     Red = 0,
//! }
//!
//! impl JsonEnum for Color {
//!     const ENUM_NAME: &'static str = "Color";
//!
//!     fn json_name(&self) -> &'static str {
//!         "RED"
//!     }
//!
//!     fn from_json_name(name: &str) -> Option<Self> {
//!         (name == "RED").then_some(Color::Red)
//!     }
//! }
//!
//! assert_eq!(Color::Red.json_name(), "RED");
//! assert_eq!(Color::from_json_name("RED"), Some(Color::Red));
//! assert_eq!(Color::from_json_name("BLUE"), None);
//! ```

mod error;
pub mod json;
pub mod xml;

pub use error::UnrecognizedWireValue;
pub use xml::XmlNode;

/// Re-exported so generated code can name serde without its own dependency
pub use serde;

/// An enum that travels through JSON as a wire name.
pub trait JsonEnum: Sized + Copy {
    /// Declared protobuf name of the enum, used in error messages
    const ENUM_NAME: &'static str;

    /// Wire name of this value
    fn json_name(&self) -> &'static str;

    /// Value for a wire name, or `None` if the name is not accepted
    fn from_json_name(name: &str) -> Option<Self>;
}

/// An enum that travels through XML as a wire name.
pub trait XmlEnum: Sized + Copy {
    /// Declared protobuf name of the enum, used in error messages
    const ENUM_NAME: &'static str;

    /// Wire name of this value
    fn xml_name(&self) -> &'static str;

    /// Value for a wire name, or `None` if the name is not accepted
    fn from_xml_name(name: &str) -> Option<Self>;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{JsonEnum, UnrecognizedWireValue, XmlEnum, XmlNode};
}

#[cfg(test)]
mod test_support;
