//! A prost-shaped enum with hand-written codecs, shaped like generated code.

use crate::{JsonEnum, XmlEnum};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum Suit {
    Hearts = 0,
    Spades = 1,
}

impl Suit {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Suit::Hearts => "SUIT_HEARTS",
            Suit::Spades => "SUIT_SPADES",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "SUIT_HEARTS" => Some(Suit::Hearts),
            "SUIT_SPADES" => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl TryFrom<i32> for Suit {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        match value {
            0 => Ok(Suit::Hearts),
            1 => Ok(Suit::Spades),
            other => Err(other),
        }
    }
}

impl From<Suit> for i32 {
    fn from(value: Suit) -> i32 {
        value as i32
    }
}

fn wire_name(suit: Suit) -> &'static str {
    match suit.as_str_name() {
        "SUIT_HEARTS" => "HEARTS",
        "SUIT_SPADES" => "SPADES",
        other => other,
    }
}

fn from_wire_name(name: &str) -> Option<Suit> {
    let declared = match name {
        "HEARTS" => "SUIT_HEARTS",
        "SPADES" => "SUIT_SPADES",
        "SUIT_HEARTS" => "SUIT_HEARTS",
        "SUIT_SPADES" => "SUIT_SPADES",
        _ => return None,
    };
    Suit::from_str_name(declared)
}

impl JsonEnum for Suit {
    const ENUM_NAME: &'static str = "Suit";

    fn json_name(&self) -> &'static str {
        wire_name(*self)
    }

    fn from_json_name(name: &str) -> Option<Self> {
        from_wire_name(name)
    }
}

impl XmlEnum for Suit {
    const ENUM_NAME: &'static str = "Suit";

    fn xml_name(&self) -> &'static str {
        wire_name(*self)
    }

    fn from_xml_name(name: &str) -> Option<Self> {
        from_wire_name(name)
    }
}

pub mod suit_json {
    pub fn serialize<S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: crate::serde::Serializer,
    {
        crate::json::serialize::<super::Suit, S>(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: crate::serde::Deserializer<'de>,
    {
        crate::json::deserialize::<super::Suit, D>(deserializer)
    }

    pub mod option {
        pub fn serialize<S>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: crate::serde::Serializer,
        {
            crate::json::option::serialize::<super::super::Suit, S>(value, serializer)
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
        where
            D: crate::serde::Deserializer<'de>,
        {
            crate::json::option::deserialize::<super::super::Suit, D>(deserializer)
        }
    }

    pub mod vec {
        pub fn serialize<S>(values: &[i32], serializer: S) -> Result<S::Ok, S::Error>
        where
            S: crate::serde::Serializer,
        {
            crate::json::vec::serialize::<super::super::Suit, S>(values, serializer)
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
        where
            D: crate::serde::Deserializer<'de>,
        {
            crate::json::vec::deserialize::<super::super::Suit, D>(deserializer)
        }
    }
}

pub mod suit_xml {
    pub fn serialize<S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: crate::serde::Serializer,
    {
        crate::xml::serialize::<super::Suit, S>(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i32, D::Error>
    where
        D: crate::serde::Deserializer<'de>,
    {
        crate::xml::deserialize::<super::Suit, D>(deserializer)
    }

    pub mod option {
        pub fn serialize<S>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: crate::serde::Serializer,
        {
            crate::xml::option::serialize::<super::super::Suit, S>(value, serializer)
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
        where
            D: crate::serde::Deserializer<'de>,
        {
            crate::xml::option::deserialize::<super::super::Suit, D>(deserializer)
        }
    }

    pub mod vec {
        pub fn serialize<S>(values: &[i32], serializer: S) -> Result<S::Ok, S::Error>
        where
            S: crate::serde::Serializer,
        {
            crate::xml::vec::serialize::<super::super::Suit, S>(values, serializer)
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
        where
            D: crate::serde::Deserializer<'de>,
        {
            crate::xml::vec::deserialize::<super::super::Suit, D>(deserializer)
        }
    }
}

/// JSON message with one enum field
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    #[serde(with = "suit_json")]
    pub suit: i32,
}

/// XML message with the enum both as an attribute and as an element
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "@suit", with = "suit_xml")]
    pub suit: i32,

    #[serde(rename = "Back", with = "suit_xml")]
    pub back: i32,
}

/// JSON message with optional and repeated enum fields
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(default, with = "suit_json::option")]
    pub trump: Option<i32>,

    #[serde(default, with = "suit_json::vec")]
    pub led: Vec<i32>,
}

/// XML message with optional and repeated enum elements
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    #[serde(
        rename = "Trump",
        default,
        skip_serializing_if = "Option::is_none",
        with = "suit_xml::option"
    )]
    pub trump: Option<i32>,

    #[serde(rename = "Led", default, with = "suit_xml::vec")]
    pub led: Vec<i32>,
}
