//! Error types for pigment

use std::path::PathBuf;

use thiserror::Error;

use crate::icc::IccError;
use crate::palette::PaletteKind;

/// Result type for pigment operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pigment operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Wrong channel count, out-of-range channel/alpha value, bad blend amount
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Empty or otherwise unusable profile bytes
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Profile file could not be read
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation mixed colors from different palette variants
    #[error("Incompatible palette: expected {expected} color, got {actual} color")]
    IncompatiblePalette {
        expected: PaletteKind,
        actual: PaletteKind,
    },

    /// ICC structure could not be decoded
    #[error("Profile parse error: {0}")]
    ProfileParse(String),

    /// Palette configuration is malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<IccError> for Error {
    fn from(err: IccError) -> Self {
        Error::ProfileParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
