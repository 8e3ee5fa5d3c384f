// src/core/config.rs
use std::env;
use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

use crate::generators::{CharacterClass, CharacterClasses};
use crate::validation::{LengthBounds, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid length bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: usize, max: usize },
}

// Configuration for the generator front-end
#[derive(Debug, Clone)]
pub struct Config {
    // Length field
    pub min_length: usize,
    pub max_length: usize,
    pub default_length: usize,

    // Classes used when none are picked on the command line
    pub default_classes: CharacterClasses,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            default_length: 8,

            default_classes: CharacterClasses::only(CharacterClass::Lower),

            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, falling back to the
    /// defaults for missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(min) = parse_var(&lookup, "PASSGEN_MIN_LENGTH") {
            config.min_length = min;
        }

        if let Some(max) = parse_var(&lookup, "PASSGEN_MAX_LENGTH") {
            config.max_length = max;
        }

        if let Some(length) = parse_var(&lookup, "PASSGEN_DEFAULT_LENGTH") {
            config.default_length = length;
        }

        if let Some(list) = lookup("PASSGEN_DEFAULT_CLASSES") {
            match CharacterClasses::parse_list(&list) {
                Ok(classes) => config.default_classes = classes,
                Err(e) => log::warn!("Ignoring PASSGEN_DEFAULT_CLASSES: {}", e),
            }
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        config
    }

    pub fn bounds(&self) -> Result<LengthBounds, ConfigError> {
        LengthBounds::new(self.min_length, self.max_length)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}: '{}' is not a valid value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_form() {
        let config = config_from(&[]);
        assert_eq!(config.min_length, 4);
        assert_eq!(config.max_length, 20);
        assert_eq!(config.default_classes, CharacterClasses::only(CharacterClass::Lower));
        assert_eq!(config.bounds().unwrap(), LengthBounds::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PASSGEN_MIN_LENGTH", "8"),
            ("PASSGEN_MAX_LENGTH", " 64 "),
            ("PASSGEN_DEFAULT_LENGTH", "16"),
            ("PASSGEN_DEFAULT_CLASSES", "upper,symbols"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.bounds().unwrap(), LengthBounds::new(8, 64).unwrap());
        assert_eq!(config.default_length, 16);
        assert_eq!(
            config.default_classes,
            CharacterClasses::only(CharacterClass::Upper).with(CharacterClass::Symbols)
        );
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("PASSGEN_MIN_LENGTH", "four"),
            ("PASSGEN_DEFAULT_CLASSES", "lower,emoji"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config.min_length, 4);
        assert_eq!(config.default_classes, CharacterClasses::only(CharacterClass::Lower));
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn inverted_bounds() {
        let config = config_from(&[("PASSGEN_MIN_LENGTH", "30")]);
        assert_eq!(
            config.bounds(),
            Err(ConfigError::InvalidBounds { min: 30, max: 20 })
        );
    }
}
