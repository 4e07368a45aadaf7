//! Errors raised around the calculator. The calculator itself never fails;
//! these cover config files and session command lines.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A session line that could not be turned into an input event.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0} needs a value")]
    MissingValue(&'static str),

    #[error("{control}: {value:?} is not a number")]
    NotANumber { control: &'static str, value: String },

    #[error("{control}: value must be finite")]
    NonFinite { control: &'static str },

    #[error("unexpected argument: {0}")]
    TrailingInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
