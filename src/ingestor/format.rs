//! Dataset format selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::errors::ConfigError;

/// The two supported dataset encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetFormat {
    /// Header row followed by positional CSV rows
    #[serde(rename = "csv", alias = "delimited")]
    Delimited,
    /// A single JSON array of record objects
    #[serde(rename = "json", alias = "structured")]
    Structured,
}

impl DatasetFormat {
    /// Infer the format from a file name, ignoring a trailing `.gz`
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);

        match Path::new(name).extension()?.to_str()? {
            "csv" => Some(Self::Delimited),
            "json" => Some(Self::Structured),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delimited => "csv",
            Self::Structured => "json",
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" | "delimited" => Ok(Self::Delimited),
            "json" | "structured" => Ok(Self::Structured),
            _ => Err(ConfigError::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}
