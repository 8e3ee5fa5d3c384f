// src/models.rs
use serde::{Deserialize, Serialize};

use crate::generators::{CharacterClass, CharacterClasses};

/// Length plus one flag per character class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub length: usize,
    #[serde(default)]
    pub use_lower: bool,
    #[serde(default)]
    pub use_upper: bool,
    #[serde(default)]
    pub use_digits: bool,
    #[serde(default)]
    pub use_symbols: bool,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: &CharacterClasses) -> Self {
        Self {
            length,
            use_lower: classes.contains(CharacterClass::Lower),
            use_upper: classes.contains(CharacterClass::Upper),
            use_digits: classes.contains(CharacterClass::Digits),
            use_symbols: classes.contains(CharacterClass::Symbols),
        }
    }

    pub fn classes(&self) -> CharacterClasses {
        CharacterClasses::from(self)
    }
}

impl From<&GenerationRequest> for CharacterClasses {
    fn from(request: &GenerationRequest) -> Self {
        CharacterClasses {
            lower: request.use_lower,
            upper: request.use_upper,
            digits: request.use_digits,
            symbols: request.use_symbols,
        }
    }
}

// Output of `--json` mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub password: Option<String>,
    pub length: Option<usize>,
    pub error: Option<String>,
}

impl GenerationResponse {
    pub fn ok(password: String) -> Self {
        Self {
            success: true,
            length: Some(password.chars().count()),
            password: Some(password),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            password: None,
            length: None,
            error: Some(error.to_string()),
        }
    }
}

impl<E: std::fmt::Display> From<Result<String, E>> for GenerationResponse {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(password) => GenerationResponse::ok(password),
            Err(e) => GenerationResponse::failed(e),
        }
    }
}
