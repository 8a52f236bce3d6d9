//! Input validation utilities.
//!
//! Small helpers shared by the configuration and decode paths to prevent
//! runtime panics and keep error messages uniform.

use crate::core::config::ConfigError;

/// Validates that a float value is finite (not NaN or infinite).
#[inline]
pub fn validate_finite(value: f32, param_name: &str) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidConfig {
            message: format!("parameter '{}' must be finite, got: {}", param_name, value),
        });
    }
    Ok(())
}

/// Validates that a value is within a specified range (inclusive).
#[inline]
pub fn validate_range<T: PartialOrd + std::fmt::Display>(
    value: T,
    min: T,
    max: T,
    param_name: &str,
) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::InvalidConfig {
            message: format!(
                "parameter '{}' must be in range [{}, {}], got: {}",
                param_name, min, max, value
            ),
        });
    }
    Ok(())
}
