//! Wire-name mapping for enum values.
//!
//! A value's wire name is its declared name, except that a redundant prefix
//! derived from the enum's own name is dropped: in enum
//! `ScreamingSnakeWithPrefix` the value `SCREAMING_SNAKE_WITH_PREFIX_DEF`
//! travels as `DEF`. The table is built once per enum and answers both
//! directions.
//!
//! # Rules
//!
//! | Step | Rule |
//! |------|------|
//! | prefix | [`upper_snake`] of the enum name plus `_` |
//! | strip | only when the remainder is non-empty and starts with a letter |
//! | collide | a stripped name equal to another value's name is not stripped |
//!
//! Reverse lookup tries, in order: an exact wire name, the prefix re-prepended
//! to the input, and finally the input as a declared name.

use crate::naming::upper_snake;

#[derive(Debug, Clone, PartialEq, Eq)]
struct WireRow {
    declared: String,
    normalized: String,
    wire: String,
}

/// Bidirectional mapping between declared value names and wire names of one enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireTable {
    prefix: String,
    rows: Vec<WireRow>,
}

impl WireTable {
    /// Build the table for an enum from its declared value names, in declaration order.
    pub fn new<'a>(enum_name: &str, declared: impl IntoIterator<Item = &'a str>) -> Self {
        let prefix = format!("{}_", upper_snake(enum_name));

        let partial: Vec<(String, String, Option<String>)> = declared
            .into_iter()
            .map(|name| {
                let normalized = upper_snake(name);
                let stripped = normalized
                    .strip_prefix(&prefix)
                    .filter(|rest| rest.starts_with(|c: char| c.is_ascii_alphabetic()))
                    .map(str::to_string);
                (name.to_string(), normalized, stripped)
            })
            .collect();

        let rows = partial
            .iter()
            .enumerate()
            .map(|(i, (declared, normalized, stripped))| {
                let wire = match stripped {
                    Some(candidate) if !collides(&partial, i, candidate) => candidate.clone(),
                    _ => declared.clone(),
                };
                WireRow {
                    declared: declared.clone(),
                    normalized: normalized.clone(),
                    wire,
                }
            })
            .collect();

        Self { prefix, rows }
    }

    /// The redundant prefix derived from the enum name, including the trailing `_`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Wire name of a declared value, if the value belongs to this enum.
    pub fn wire_name(&self, declared: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.declared == declared)
            .map(|row| row.wire.as_str())
    }

    /// Resolve an incoming wire string to the declared value name.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        if input.is_empty() {
            return None;
        }

        if let Some(row) = self.rows.iter().find(|row| row.wire == input) {
            return Some(&row.declared);
        }

        let prefixed = format!("{}{}", self.prefix, input);
        if let Some(row) = self.rows.iter().find(|row| row.normalized == prefixed) {
            return Some(&row.declared);
        }

        self.rows
            .iter()
            .find(|row| row.declared == input)
            .map(|row| row.declared.as_str())
    }

    /// `(declared, wire)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows
            .iter()
            .map(|row| (row.declared.as_str(), row.wire.as_str()))
    }

    /// Every string [`resolve`](Self::resolve) accepts, paired with the declared
    /// name it resolves to, ordered by lookup precedence.
    pub fn accepted_inputs(&self) -> Vec<(&str, &str)> {
        let wires = self.rows.iter().map(|row| (row.wire.as_str(), row));
        let prefixed = self.rows.iter().filter_map(|row| {
            row.normalized
                .strip_prefix(&self.prefix)
                .filter(|rest| !rest.is_empty())
                .map(|rest| (rest, row))
        });
        let bare = self.rows.iter().map(|row| (row.declared.as_str(), row));

        let mut accepted: Vec<(&str, &str)> = Vec::new();
        for (input, row) in wires.chain(prefixed).chain(bare) {
            if !accepted.iter().any(|(seen, _)| *seen == input) {
                accepted.push((input, row.declared.as_str()));
            }
        }
        accepted
    }

    /// Number of values in the enum.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the enum declares no values.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn collides(partial: &[(String, String, Option<String>)], index: usize, candidate: &str) -> bool {
    partial
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .any(|(_, (declared, normalized, stripped))| {
            declared == candidate
                || normalized == candidate
                || stripped.as_deref() == Some(candidate)
        })
}

#[cfg(test)]
#[path = "wire/wire_tests.rs"]
mod wire_tests;
