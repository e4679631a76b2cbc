//! Structured error types for configuration resolution.
//!
//! Resolution is a one-shot, fail-fast startup step: nothing here is
//! retried. Every variant carries the offending path, flag, or file so the
//! operator can correct input and re-run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Strict-mode parse failure: an unrecognized flag or a flag missing its
    /// value. The message is clap's rendered error, usage included.
    #[error("{0}")]
    Parse(String),

    /// A named configuration file exists but could not be loaded: bad YAML,
    /// unknown keys, or values of the wrong type.
    #[error("failed to load config file {path}: {message}")]
    FileLoad { path: PathBuf, message: String },

    /// A raw value could not be coerced to its field's declared type.
    #[error("cannot coerce '{value}' to {expected} for '{path}'")]
    Coercion {
        path: String,
        value: String,
        expected: &'static str,
    },

    /// A dotted path addressed a segment the schema does not declare.
    #[error("unknown configuration path '{0}'")]
    UnknownPath(String),

    /// A wallet hotkey file is absent or malformed.
    #[error("failed to read hotkey file {path}: {message}")]
    WalletKey { path: PathBuf, message: String },

    /// A field required by an operation was never resolved.
    #[error("required field '{0}' is not set")]
    Missing(&'static str),

    /// An interactive prompt could not be read.
    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
