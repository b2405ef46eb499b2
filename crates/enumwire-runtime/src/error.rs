//! Error type for values without a wire representation

use thiserror::Error;

/// A numeric value or wire name that does not belong to the enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized value {value} for enum {enum_name}")]
pub struct UnrecognizedWireValue {
    /// Declared name of the enum
    pub enum_name: &'static str,

    /// The offending value as it appeared (numbers bare, names quoted)
    pub value: String,
}

impl UnrecognizedWireValue {
    /// A numeric value with no declared counterpart
    pub fn number(enum_name: &'static str, number: i32) -> Self {
        Self {
            enum_name,
            value: number.to_string(),
        }
    }

    /// A wire name the enum does not accept
    pub fn name(enum_name: &'static str, name: &str) -> Self {
        Self {
            enum_name,
            value: format!("{name:?}"),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
