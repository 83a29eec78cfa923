use std::io;

use thiserror::Error;

use crate::password::{MAX_LENGTH, MIN_LENGTH};

pub type Result<T> = std::result::Result<T, Error>;

/// Why a length input was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LengthError {
    #[error("length is required")]
    Missing,
    #[error("'{0}' is not a number")]
    NotNumeric(String),
    #[error("should be min of {min} characters, got {0}", min = MIN_LENGTH)]
    TooShort(usize),
    /// Holds the input text, which may not fit in a `usize`
    #[error("should be max of {max} characters, got {0}", max = MAX_LENGTH)]
    TooLong(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown character class: '{0}'")]
pub struct UnknownClass(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("invalid length: {0}")]
    InvalidLength(#[from] LengthError),
    #[error("at least one character class must be selected")]
    NoClassSelected,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid seed '{0}', expected an unsigned integer")]
    InvalidSeed(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Class(#[from] UnknownClass),
    #[error("{0}")]
    Cli(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IO(#[from] io::Error),
}
