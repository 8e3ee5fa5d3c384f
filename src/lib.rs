//! Random password generation from selectable character classes.
//!
//! The core is two operations: [`validate`] checks a raw length field
//! against inclusive bounds, and [`generate`] samples a password from the
//! alphabet of the enabled [`CharacterClass`]es. Everything else in the
//! crate is the terminal front-end around them.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod validation;

pub use crate::error::{Error, Result};
pub use crate::generators::{
    generate, Alphabet, CharacterClass, CharacterClasses, GenerationError, PasswordGenerator,
    RandomSource, SequenceSource,
};
pub use crate::models::{GenerationRequest, GenerationResponse};
pub use crate::validation::{
    validate, validate_length, LengthBounds, ValidationError, ValidationErrorKind,
};
