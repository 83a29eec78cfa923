use std::{fmt, num::IntErrorKind, ops::Deref};

use serde::{Serialize, Serializer};
use zeroize::Zeroize;

use crate::error::{LengthError, PasswordError};

mod class;
mod generator;
mod random;

pub use class::{CharacterClass, ClassSet};
pub use generator::{generate, Generator};
pub use random::{RandomSource, Unit};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// What to generate: a length and the classes to draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    pub fn validate(&self) -> Result<(), PasswordError> {
        check_length(self.length)?;

        if self.classes.is_empty() {
            return Err(PasswordError::NoClassSelected);
        }

        Ok(())
    }
}

pub fn check_length(length: usize) -> Result<usize, LengthError> {
    if length < MIN_LENGTH {
        Err(LengthError::TooShort(length))
    } else if length > MAX_LENGTH {
        Err(LengthError::TooLong(length.to_string()))
    } else {
        Ok(length)
    }
}

/// Parse a length typed by the user and check its bounds
pub fn parse_length(input: &str) -> Result<usize, LengthError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LengthError::Missing);
    }

    let length = input.parse::<usize>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow => LengthError::TooLong(input.to_string()),
        _ => LengthError::NotNumeric(input.to_string()),
    })?;

    check_length(length)
}

/// A generated password, wiped from memory when dropped
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn new(password: String) -> Self {
        Self(password)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for GeneratedPassword {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GeneratedPassword({} chars)", self.0.len())
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Serialize for GeneratedPassword {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
