use std::env;

use crate::error::ConfigError;

/// Default length input, used when no length is given on the command line
pub const LENGTH_VAR: &str = "PWFORM_LENGTH";
/// Seed for reproducible output
pub const SEED_VAR: &str = "PWFORM_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub length: Option<String>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let length = lookup(LENGTH_VAR).filter(|length| !length.trim().is_empty());

        let seed = match lookup(SEED_VAR) {
            Some(seed) => Some(parse_seed(&seed)?),
            None => None,
        };

        Ok(Self { length, seed })
    }
}

pub fn parse_seed(seed: &str) -> Result<u64, ConfigError> {
    seed.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(seed.to_string()))
}
