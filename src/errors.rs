//! Error results that can be returned by the converter
use std::path::PathBuf;
use thiserror::Error;

/// Decoder error that defines an error (message) on the given position of a glyph string
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message} (offset {offset})")]
pub struct DecodeError {
    /// Decode error message
    pub message: String,
    /// Position (0-based) of the offending character in the glyph string
    pub offset: usize,
}

impl DecodeError {
    #[must_use]
    pub fn new(message: &str, offset: usize) -> Self {
        DecodeError {
            message: message.to_string(),
            offset,
        }
    }
}

/// Fatal errors of a conversion run
#[derive(Debug, Error)]
pub enum Error {
    #[error("codepoint {codepoint} (U+{codepoint:04X}) not found in .hex file")]
    MissingGlyph { codepoint: u32 },

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("cannot decode glyph for codepoint {codepoint} (U+{codepoint:04X}): {source}")]
    Decode {
        codepoint: u32,
        #[source]
        source: DecodeError,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
