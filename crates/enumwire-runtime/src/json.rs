//! Serde adapters for `i32` enum fields carried as JSON wire names.
//!
//! Generated code wraps these in per-enum `with` modules:
//!
//! ```ignore
//! #[serde(with = "root_enum_json")]
//! pub field: i32,
//!
//! #[serde(default, with = "root_enum_json::option")]
//! pub maybe: Option<i32>,
//!
//! #[serde(default, with = "root_enum_json::vec")]
//! pub many: Vec<i32>,
//! ```

use crate::JsonEnum;
use crate::error::UnrecognizedWireValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use std::marker::PhantomData;

/// Serialize the enum number in `value` as its JSON wire name.
///
/// Numbers outside the enum fail with [`UnrecognizedWireValue`].
pub fn serialize<E, S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
where
    E: JsonEnum + TryFrom<i32>,
    S: Serializer,
{
    match E::try_from(*value) {
        Ok(known) => serializer.serialize_str(known.json_name()),
        Err(_) => Err(ser::Error::custom(UnrecognizedWireValue::number(
            E::ENUM_NAME,
            *value,
        ))),
    }
}

/// Deserialize a JSON wire name into the enum number.
///
/// Names the enum does not accept fail with [`UnrecognizedWireValue`].
pub fn deserialize<'de, E, D>(deserializer: D) -> Result<i32, D::Error>
where
    E: JsonEnum + Into<i32>,
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    lookup::<E, D::Error>(&name)
}

fn lookup<E, Error>(name: &str) -> Result<i32, Error>
where
    E: JsonEnum + Into<i32>,
    Error: de::Error,
{
    E::from_json_name(name)
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
    E: JsonEnum + TryFrom<i32>,
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
    use crate::JsonEnum;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `Some` as the wire name and `None` as an empty value.
    pub fn serialize<E, S>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        E: JsonEnum + TryFrom<i32>,
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
        E: JsonEnum + Into<i32>,
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
    use crate::JsonEnum;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize every number as its wire name, in order.
    pub fn serialize<E, S>(values: &[i32], serializer: S) -> Result<S::Ok, S::Error>
    where
        E: JsonEnum + TryFrom<i32>,
        S: Serializer,
    {
        serializer.collect_seq(values.iter().map(|value| WireName::<E>::new(*value)))
    }

    /// Deserialize a sequence of wire names. One unknown name fails the whole field.
    pub fn deserialize<'de, E, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
    where
        E: JsonEnum + Into<i32>,
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|name| lookup::<E, D::Error>(name))
            .collect()
    }
}
