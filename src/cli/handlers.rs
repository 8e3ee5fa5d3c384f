// src/cli/handlers.rs
use crate::core::config::Config;
use crate::error::Result;
use crate::generators::{random, CharacterClasses, PasswordGenerator, RandomSource};
use crate::models::GenerationRequest;

// Handlers for CLI commands

/// Validate the raw length, then generate. Falls back to the configured
/// length and classes for anything not given on the command line.
pub fn handle_generate(
    config: &Config,
    raw_length: Option<&str>,
    classes: CharacterClasses,
    seed: Option<u64>,
) -> Result<String> {
    let request = build_request(config, raw_length, classes)?;
    generate_seeded(&request, seed)
}

/// Generate from a JSON `GenerationRequest`. The length is checked against
/// the configured bounds; the flags are used as given.
pub fn handle_request(config: &Config, json: &str, seed: Option<u64>) -> Result<String> {
    let request: GenerationRequest = serde_json::from_str(json)?;
    config.bounds()?.validate(&request.length.to_string())?;
    generate_seeded(&request, seed)
}

fn generate_seeded(request: &GenerationRequest, seed: Option<u64>) -> Result<String> {
    match seed {
        Some(seed) => {
            log::debug!("Using seeded random source");
            generate_with(PasswordGenerator::with_source(random::seeded(seed)), request)
        }
        None => generate_with(PasswordGenerator::new(), request),
    }
}

pub fn handle_validate(config: &Config, raw_length: &str) -> Result<usize> {
    let bounds = config.bounds()?;
    Ok(bounds.validate(raw_length)?)
}

pub fn build_request(
    config: &Config,
    raw_length: Option<&str>,
    classes: CharacterClasses,
) -> Result<GenerationRequest> {
    let bounds = config.bounds()?;
    let length = match raw_length {
        Some(raw) => bounds.validate(raw)?,
        None => bounds.validate(&config.default_length.to_string())?,
    };

    let classes = if classes.is_empty() {
        config.default_classes
    } else {
        classes
    };

    Ok(GenerationRequest::new(length, &classes))
}

fn generate_with<S: RandomSource>(
    mut generator: PasswordGenerator<S>,
    request: &GenerationRequest,
) -> Result<String> {
    Ok(generator.generate_for(request)?)
}
