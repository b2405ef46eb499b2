//! Serde adapters for `i32` enum fields carried as XML wire names.
//!
//! The same adapter serves elements (`<Field>DEF</Field>`) and attributes
//! (`field="DEF"`); which one a field uses is decided by its serde rename,
//! recorded for each field by an [`XmlNode`]. Repeated fields travel as one
//! element per value.

use crate::XmlEnum;
use crate::error::UnrecognizedWireValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use std::marker::PhantomData;

/// Where an enum field's wire name appears in an XML document.
///
/// # Examples
///
/// ```
/// use enumwire_runtime::XmlNode;
///
/// assert_eq!(XmlNode::Element("Field").serde_name(), "Field");
/// assert_eq!(XmlNode::Attribute("field").serde_name(), "@field");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlNode {
    /// Text content of a child element
    Element(&'static str),

    /// Value of an attribute on the message element
    Attribute(&'static str),
}

impl XmlNode {
    /// Node name as written in the document
    pub fn name(&self) -> &'static str {
        match self {
            XmlNode::Element(name) | XmlNode::Attribute(name) => name,
        }
    }

    /// Whether the field is an attribute
    pub fn is_attribute(&self) -> bool {
        matches!(self, XmlNode::Attribute(_))
    }

    /// Name to use in `#[serde(rename = "...")]`.
    ///
    /// quick-xml maps fields whose name starts with `@` to attributes.
    pub fn serde_name(&self) -> String {
        match self {
            XmlNode::Element(name) => (*name).to_string(),
            XmlNode::Attribute(name) => format!("@{name}"),
        }
    }
}

/// Serialize the enum number in `value` as its XML wire name.
///
/// Numbers outside the enum fail with [`UnrecognizedWireValue`].
pub fn serialize<E, S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
where
    E: XmlEnum + TryFrom<i32>,
    S: Serializer,
{
    match E::try_from(*value) {
        Ok(known) => serializer.serialize_str(known.xml_name()),
        Err(_) => Err(ser::Error::custom(UnrecognizedWireValue::number(
            E::ENUM_NAME,
            *value,
        ))),
    }
}

/// Deserialize an XML wire name into the enum number.
///
/// Surrounding whitespace in element text is ignored. Names the enum does
/// not accept fail with [`UnrecognizedWireValue`].
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<i32, D::Error>
where
    E: XmlEnum + Into<i32>,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    lookup::<E, D::Error>(&text)
}

fn lookup<E, Error>(text: &str) -> Result<i32, Error>
where
    E: XmlEnum + Into<i32>,
    Error: de::Error,
{
    let name = text.trim();
    E::from_xml_name(name)
        .map(Into::into)
        .ok_or_else(|| de::Error::custom(UnrecognizedWireValue::name(E::ENUM_NAME, name)))
}

/// An enum number that serializes as its wire name.
struct WireName<E> {
    value: i32,
    enum_type: PhantomData<E>,
}

impl<E> WireName<E> {
    fn new(value: i32) -> Self {
        Self {
            value,
            enum_type: PhantomData,
        }
    }
}

impl<E> Serialize for WireName<E>
where
    E: XmlEnum + TryFrom<i32>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize::<E, S>(&self.value, serializer)
    }
}

/// Adapters for optional enum fields, which prost generates as `Option<i32>`.
///
/// `None` is written as the format's empty value; pair the field with
/// `#[serde(default)]` so an absent value reads back as `None`.
pub mod option {
    use super::{WireName, lookup};
    use crate::XmlEnum;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `Some` as the wire name and `None` as an empty value.
    pub fn serialize<E, S>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: XmlEnum + TryFrom<i32>,
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&WireName::<E>::new(*value)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional wire name.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        E: XmlEnum + Into<i32>,
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|name| lookup::<E, D::Error>(&name))
            .transpose()
    }
}

/// Adapters for repeated enum fields, which prost generates as `Vec<i32>`.
pub mod vec {
    use super::{WireName, lookup};
    use crate::XmlEnum;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize every number as its wire name, in order.
    pub fn serialize<E, S>(values: &[i32], serializer: S) -> Result<S::Ok, S::Error>
    where
        E: XmlEnum + TryFrom<i32>,
        S: Serializer,
    {
        serializer.collect_seq(values.iter().map(|value| WireName::<E>::new(*value)))
    }

    /// Deserialize a sequence of wire names. One unknown name fails the whole field.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
    where
        E: XmlEnum + Into<i32>,
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|name| lookup::<E, D::Error>(name))
            .collect()
    }
}
