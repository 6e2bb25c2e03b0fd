//! Error types for Cellcode.
//!
//! Rejected input is never an error: a keystroke or paste that fails the
//! validation policy is dropped silently. These errors cover setup only
//! (bad patterns, bad configuration files, clipboard access).

use thiserror::Error;

use crate::platform::ClipboardError;

/// The main error type for Cellcode operations.
#[derive(Debug, Error)]
pub enum CodeInputError {
    /// A custom acceptance pattern failed to compile.
    #[error("invalid acceptance pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    /// A configuration could not be written out.
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    /// The system clipboard could not be read.
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// A specialized Result type for Cellcode operations.
pub type Result<T> = std::result::Result<T, CodeInputError>;
