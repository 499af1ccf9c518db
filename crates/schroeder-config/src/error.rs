//! Error types for preset and parameter handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, saving or parsing reverb parameters.
#[derive(Debug, Error)]
pub enum PresetError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Preset not found
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// A comma-separated list entry could not be parsed
    #[error("invalid list entry '{value}': {reason}")]
    InvalidList {
        /// The offending entry, trimmed.
        value: String,
        /// Parser message.
        reason: String,
    },
}

impl PresetError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PresetError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid list entry error.
    pub fn invalid_list(value: impl Into<String>, reason: impl ToString) -> Self {
        PresetError::InvalidList {
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
