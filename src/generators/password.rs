// src/generators/password.rs
use rand::rngs::ThreadRng;
use thiserror::Error;

use super::charset::{Alphabet, CharacterClasses};
use super::random::RandomSource;
use crate::models::GenerationRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("At least one character type must be included")]
    EmptyAlphabet,
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Builds passwords by sampling uniformly, with replacement, from the
/// alphabet of the enabled classes.
pub struct PasswordGenerator<S = ThreadRng> {
    source: S,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_source(rand::thread_rng())
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> PasswordGenerator<S> {
    pub fn with_source(source: S) -> Self {
        PasswordGenerator { source }
    }

    pub fn generate(&mut self, length: usize, classes: &CharacterClasses) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }

        let alphabet = Alphabet::from_classes(classes);
        if alphabet.is_empty() {
            log::warn!("Refusing to generate a password with no character class enabled");
            return Err(GenerationError::EmptyAlphabet);
        }

        log::debug!(
            "Generating password: length={}, classes={}, alphabet_size={}",
            length,
            classes,
            alphabet.len()
        );

        let chars = alphabet.as_chars();
        let password = (0..length)
            .map(|_| {
                // Sources are trusted to honor the bound, but never index out of range.
                let index = self.source.next_index(chars.len()) % chars.len();
                chars[index]
            })
            .collect();

        Ok(password)
    }

    /// Generate from a request without re-validating its length.
    pub fn generate_for(&mut self, request: &GenerationRequest) -> Result<String> {
        self.generate(request.length, &request.classes())
    }
}

/// Generate with the thread-local random generator.
pub fn generate(length: usize, classes: &CharacterClasses) -> Result<String> {
    PasswordGenerator::new().generate(length, classes)
}
