// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod random;

pub use charset::{Alphabet, CharacterClass, CharacterClasses, UnknownClassError};
pub use password::{generate, GenerationError, PasswordGenerator};
pub use random::{RandomSource, SequenceSource};
