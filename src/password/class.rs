use std::{fmt, iter::FromIterator, str::FromStr};

use serde::Serialize;

use crate::error::UnknownClass;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "1234567890";
const SYMBOLS: &str = "!@#$%^&*(){}[]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order their alphabets are concatenated
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Uppercase => 0b0001,
            CharacterClass::Lowercase => 0b0010,
            CharacterClass::Digit => 0b0100,
            CharacterClass::Symbol => 0b1000,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" => Ok(CharacterClass::Symbol),
            _ => Err(UnknownClass(s.to_string())),
        }
    }
}

/// A set of enabled character classes.
///
/// Iteration always follows [`CharacterClass::ALL`], whatever order the
/// classes were inserted in, so the combined alphabet is stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.iter().copied().collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class)
        } else {
            self.remove(class)
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .iter()
            .copied()
            .filter(move |class| self.contains(*class))
    }

    /// Concatenate the alphabets of every enabled class
    pub fn alphabet(&self) -> Vec<char> {
        self.iter().flat_map(|class| class.alphabet().chars()).collect()
    }
}

impl From<CharacterClass> for ClassSet {
    fn from(class: CharacterClass) -> Self {
        Self(class.bit())
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}
