use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Reads and deserializes a YAML document from disk.
pub fn load_yaml<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let file_contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&file_contents)?)
}

/// Collects range violations so a bad file reports every problem at once.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    problems: Vec<String>,
}

impl Validator {
    pub fn positive(&mut self, name: &str, value: f64) -> &mut Self {
        if !(value.is_finite() && value > 0.0) {
            self.problems.push(format!("{name} must be positive, got {value}"));
        }
        self
    }

    pub fn within(&mut self, name: &str, value: f64, min: f64, max: f64) -> &mut Self {
        if !(value.is_finite() && (min..=max).contains(&value)) {
            self.problems
                .push(format!("{name} must be within [{min}, {max}], got {value}"));
        }
        self
    }

    pub fn check(&mut self, condition: bool, message: impl Into<String>) -> &mut Self {
        if !condition {
            self.problems.push(message.into());
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ConfigError> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(self.problems.join("; ")))
        }
    }
}
