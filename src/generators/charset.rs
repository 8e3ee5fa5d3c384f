// src/generators/charset.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown character class '{0}'")]
pub struct UnknownClassError(pub String);

/// One of the four fixed character classes offered as a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lower,
    Upper,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Every class, in alphabet order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lower => LOWERCASE_CHARS,
            CharacterClass::Upper => UPPERCASE_CHARS,
            CharacterClass::Digits => DIGIT_CHARS,
            CharacterClass::Symbols => SYMBOL_CHARS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lower => "lower",
            CharacterClass::Upper => "upper",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }

    /// Label shown next to the toggle.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lower => "Include Lowercase letters",
            CharacterClass::Upper => "Include Uppercase letters",
            CharacterClass::Digits => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = UnknownClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CharacterClass::Lower),
            "upper" | "uppercase" => Ok(CharacterClass::Upper),
            "digits" | "digit" | "numbers" => Ok(CharacterClass::Digits),
            "symbols" | "symbol" | "special" => Ok(CharacterClass::Symbols),
            other => Err(UnknownClassError(other.to_string())),
        }
    }
}

/// Set of enabled character classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClasses {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn only(class: CharacterClass) -> Self {
        Self::none().with(class)
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.set(class, true);
        self
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lower => self.lower,
            CharacterClass::Upper => self.upper,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Lower => self.lower = enabled,
            CharacterClass::Upper => self.upper = enabled,
            CharacterClass::Digits => self.digits = enabled,
            CharacterClass::Symbols => self.symbols = enabled,
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        let enabled = self.contains(class);
        self.set(class, !enabled);
    }

    pub fn is_empty(&self) -> bool {
        !(self.lower || self.upper || self.digits || self.symbols)
    }

    /// Enabled classes in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    /// Parse a comma separated list such as `"lower,digits"`.
    pub fn parse_list(list: &str) -> Result<Self, UnknownClassError> {
        list.split(',')
            .filter(|s| !s.trim().is_empty())
            .map(CharacterClass::from_str)
            .collect()
    }
}

impl FromIterator<CharacterClass> for CharacterClasses {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CharacterClasses::none(), CharacterClasses::with)
    }
}

impl fmt::Display for CharacterClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(CharacterClass::name).collect();
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join(","))
        }
    }
}

/// Characters of every enabled class, concatenated in class order.
///
/// Not deduplicated; empty when no class is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn from_classes(classes: &CharacterClasses) -> Self {
        let chars = classes
            .iter()
            .flat_map(|class| class.chars().chars())
            .collect();
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
