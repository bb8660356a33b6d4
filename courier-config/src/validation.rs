// Settings validation

use crate::{ConfigError, Result};

/// Trait for validating loaded settings
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Settings validator with rules
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a value is present and not blank
    pub fn not_empty(value: Option<&str>, field: &str) -> Result<()> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                field
            ))),
        }
    }

    /// Validate that a number is within an inclusive range
    pub fn in_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<()> {
        if value < min || value > max {
            return Err(ConfigError::ValidationError(format!(
                "{} must be between {} and {}",
                field, min, max
            )));
        }
        Ok(())
    }

    /// Validate URL scheme
    pub fn is_url(value: &str, field: &str) -> Result<()> {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "{} must be a valid URL",
                field
            )));
        }
        Ok(())
    }
}
