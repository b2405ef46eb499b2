//! Generator configuration parsed from the protoc parameter string

use crate::error::{GenerateError, GenerateResult};
use std::fmt;
use std::str::FromStr;

/// Token that switches output placement to mirror the schema file's path
const SOURCE_RELATIVE: &str = "paths=source_relative";

/// Token for protoc's default placement (honor the declared output path)
const IMPORT_PATHS: &str = "paths=import";

/// Output encoding selected by the parameter string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    Xml,
    Json,
    Gql,
}

impl Mode {
    /// All modes, in the order they are documented
    pub const ALL: [Mode; 3] = [Mode::Xml, Mode::Json, Mode::Gql];

    /// The parameter token naming this mode
    pub fn token(self) -> &'static str {
        match self {
            Mode::Xml => "xml",
            Mode::Json => "json",
            Mode::Gql => "gql",
        }
    }

    /// Suffix appended to the schema file stem for this mode's output file
    pub fn file_suffix(self) -> &'static str {
        match self {
            Mode::Xml => ".enums.xml.rs",
            Mode::Json => ".enums.json.rs",
            Mode::Gql => ".enums.gql.rs",
        }
    }
}

impl FromStr for Mode {
    type Err = GenerateError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "xml" => Ok(Mode::Xml),
            "json" => Ok(Mode::Json),
            "gql" => Ok(Mode::Gql),
            other => Err(GenerateError::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Parsed parameter state for one generator invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    modes: Vec<Mode>,
    source_relative: bool,
}

impl RunConfig {
    /// Parse a comma-separated parameter string such as `xml,json,paths=source_relative`.
    ///
    /// Whitespace around tokens and empty tokens are tolerated. Any other
    /// unrecognized token is rejected, as is a parameter naming no mode.
    pub fn parse(parameter: &str) -> GenerateResult<Self> {
        if parameter.trim().is_empty() {
            return Err(GenerateError::configuration(
                "no parameter provided: expected one or more of 'xml', 'json', 'gql'",
            ));
        }

        let mut modes = Vec::new();
        let mut source_relative = false;

        for token in parameter.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token {
                SOURCE_RELATIVE => source_relative = true,
                IMPORT_PATHS => source_relative = false,
                _ => {
                    let mode = token.parse::<Mode>().map_err(|_| {
                        GenerateError::configuration(format!("unrecognized parameter {token:?}"))
                    })?;
                    if !modes.contains(&mode) {
                        modes.push(mode);
                    }
                }
            }
        }

        if modes.is_empty() {
            return Err(GenerateError::configuration(format!(
                "missing mode in parameter {parameter:?}: expected one or more of 'xml', 'json', 'gql'"
            )));
        }

        Ok(Self {
            modes,
            source_relative,
        })
    }

    /// Create a configuration directly from modes (duplicates are collapsed)
    pub fn new(modes: impl IntoIterator<Item = Mode>, source_relative: bool) -> Self {
        let mut unique = Vec::new();
        for mode in modes {
            if !unique.contains(&mode) {
                unique.push(mode);
            }
        }
        Self {
            modes: unique,
            source_relative,
        }
    }

    /// Requested modes in parameter order
    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Whether output paths mirror the schema file's own path
    pub fn source_relative(&self) -> bool {
        self.source_relative
    }
}
