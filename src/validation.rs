// src/validation.rs
use std::num::IntErrorKind;
use thiserror::Error;

use crate::core::config::ConfigError;

/// Shortest password length accepted by default.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Longest password length accepted by default.
pub const DEFAULT_MAX_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("length is required")]
    Missing,

    #[error("length must be a whole number")]
    NotANumber { input: String },

    #[error("should be min of {min} character")]
    TooShort { min: usize },

    #[error("should be max of {max} character")]
    TooLong { max: usize },
}

/// Rule violated by a length field.
///
/// `NotANumber` is reported under `Missing`: the form treats anything
/// that is not a usable number the same way as an empty field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Missing,
    TooShort,
    TooLong,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::Missing | ValidationError::NotANumber { .. } => {
                ValidationErrorKind::Missing
            }
            ValidationError::TooShort { .. } => ValidationErrorKind::TooShort,
            ValidationError::TooLong { .. } => ValidationErrorKind::TooLong,
        }
    }

    /// Human readable message for display next to the field.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Inclusive range of accepted password lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    pub fn validate(&self, raw: &str) -> Result<usize, ValidationError> {
        validate(raw, self.min, self.max)
    }
}

/// Validate a raw length field against `min..=max`.
///
/// Surrounding whitespace is ignored. Decimal input such as `"8.5"` is
/// rejected rather than truncated. Integers too large (or too small) for
/// an `i64` are classified as too long (or too short) instead of being
/// reported as malformed.
pub fn validate(raw: &str, min: usize, max: usize) -> Result<usize, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing);
    }

    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => ValidationError::TooLong { max },
                IntErrorKind::NegOverflow => ValidationError::TooShort { min },
                _ => ValidationError::NotANumber {
                    input: trimmed.to_string(),
                },
            })
        }
    };

    let length = match usize::try_from(value) {
        Ok(length) => length,
        Err(_) if value < 0 => return Err(ValidationError::TooShort { min }),
        Err(_) => return Err(ValidationError::TooLong { max }),
    };

    if length < min {
        return Err(ValidationError::TooShort { min });
    }
    if length > max {
        return Err(ValidationError::TooLong { max });
    }

    Ok(length)
}

/// Validate against the default bounds (4 to 20).
pub fn validate_length(raw: &str) -> Result<usize, ValidationError> {
    validate(raw, DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
}
