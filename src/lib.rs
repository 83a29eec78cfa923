pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod password;

pub use config::Config;
pub use error::{Error, LengthError, PasswordError, Result, UnknownClass};
pub use form::PasswordForm;
pub use password::{
    generate, CharacterClass, ClassSet, GeneratedPassword, GenerationRequest, Generator,
    RandomSource, Unit, MAX_LENGTH, MIN_LENGTH,
};
