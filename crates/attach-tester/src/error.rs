//! Error handling for the attach-tester crate.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for attach-tester operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running the tester.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A scenario file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A scenario file is not valid RON for a scenario.
    #[error("failed to parse {}: {message}", path.display())]
    Scenario {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message including position.
        message: String,
    },
    /// Errors surfaced by the positioning engine.
    #[error("positioning error: {0}")]
    Attach(#[from] attach::Error),
    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A command-line value could not be parsed.
    #[error("invalid value: {0}")]
    Parse(String),
    /// Generic error for unexpected conditions.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Helper to build a parse error from an arbitrary message.
    pub fn parse<M: Into<String>>(msg: M) -> Self {
        Self::Parse(msg.into())
    }

    /// Helper for wrapping generic string errors.
    pub fn other<M: Into<String>>(msg: M) -> Self {
        Self::Other(msg.into())
    }
}
