//! Output formats
//!
//!     Parsed sections are plain serde records, so every output format is a serializer over
//!     the same data. JSON and YAML are supported; both can be pretty or compact (YAML is
//!     always block style, so `pretty` only affects JSON).
//!
//!     A single file serializes as a list of sections. A directory serializes as a list of
//!     `{path, sections}` entries, one per file.

use crate::onf::ast::Section;
use crate::onf::loader::ParsedFile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::Yaml];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Json => "JSON, pretty-printed unless --compact",
            OutputFormat::Yaml => "YAML, block style",
        }
    }

    /// Serialize any serde value in this format.
    pub fn serialize<T: Serialize + ?Sized>(
        &self,
        value: &T,
        pretty: bool,
    ) -> Result<String, FormatError> {
        match self {
            OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unknown output format '{0}' (expected json or yaml)")]
    UnknownFormat(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn serialize_sections(
    sections: &[Section],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, FormatError> {
    format.serialize(sections, pretty)
}

pub fn serialize_files(
    files: &[ParsedFile],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, FormatError> {
    format.serialize(files, pretty)
}
