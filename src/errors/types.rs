//! Error type definitions for the zip lookup service

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Dataset loading errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Response serialization errors
    #[error("error encoding json: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Record loader errors
///
/// Any of these aborts the whole load; no partial record sequence is
/// ever returned.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dataset file could not be opened
    #[error("error opening zips file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failure while streaming the dataset
    #[error("error reading zips: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited-text row
    #[error("error loading zips from CSV at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Structured-text decode failure
    #[error("error decoding zips from json: {0}")]
    Decode(#[from] serde_json::Error),

    /// No format configured and none could be inferred from the path
    #[error("cannot infer dataset format from {}", path.display())]
    UnknownFormat { path: PathBuf },

    /// Compressed input whose codec is not available
    #[error("unsupported compressed dataset: {kind}")]
    UnsupportedCompression { kind: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Bind address missing from every configuration layer
    #[error("please set ADDR environment variable")]
    MissingAddr,

    /// Unrecognised dataset format name
    #[error("invalid dataset format '{value}' (expected csv, delimited, json or structured)")]
    InvalidFormat { value: String },

    /// Config file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::Config`]
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl LoadError {
    /// Create a parse error for the given 1-based line
    pub fn parse<M: Into<String>>(line: u64, message: M) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an open error for the given path
    pub fn open<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
