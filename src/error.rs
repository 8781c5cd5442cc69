// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FcsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed header: {field} field is not a valid offset (found {found:?})")]
    MalformedHeader { field: &'static str, found: String },

    #[error("TEXT segment tokenize error: {0}")]
    Tokenize(String),

    #[error("invalid keyword (non printable-ASCII): {0:?}")]
    InvalidKeyword(String),

    #[error("missing required keyword: {0}")]
    MissingRequiredKeyword(String),

    #[error("missing required parameter keyword for channel {channel}: {keyword}")]
    MissingParameterKeyword { channel: usize, keyword: String },

    #[error("could not convert {keyword} value {value:?} to an integer")]
    NumericConversion { keyword: String, value: String },

    #[error("unsupported byte order: {0:?}")]
    UnsupportedByteOrder(String),

    #[error("insufficient DATA segment: need {needed} bytes, have {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, FcsError>;
