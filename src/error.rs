//! Error types for curlconvert.
//!
//! Parsing has exactly one failure: no URL could be located in the command.
//! Everything else the parser does not understand is dropped silently.

use thiserror::Error;

/// Result type alias using curlconvert's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The only way [`crate::parse`] can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Neither URL rule matched the preprocessed command text.
    #[error("cannot find URL")]
    NoUrl,
}

/// Crate-level error, used by the driver and the CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
