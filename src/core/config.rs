//! Configuration for the verification engine.
//!
//! This module provides the configuration structures and validation trait
//! used across the crate: the verifier's confidence threshold and the errors
//! that configuration validation can produce.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::validation::{validate_finite, validate_range};

/// Errors that can occur during configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error indicating that a configuration value is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// A message describing the invalid value.
        message: String,
    },
}

/// A trait for validating configuration parameters.
///
/// Implemented by configuration structures so that builders can check values
/// once, up front, instead of guarding every use site.
pub trait ConfigValidator {
    /// Validates the configuration.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Returns the default configuration.
    fn get_defaults() -> Self
    where
        Self: Sized;
}

/// Configuration for the task verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Minimum confidence score for a detection to count toward a task.
    pub confidence_threshold: f32,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
        }
    }
}

impl VerifierConfig {
    /// Creates a configuration with the given confidence threshold.
    pub fn with_threshold(confidence_threshold: f32) -> Self {
        Self {
            confidence_threshold,
        }
    }
}

impl ConfigValidator for VerifierConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_finite(self.confidence_threshold, "confidence_threshold")?;
        validate_range(self.confidence_threshold, 0.0, 1.0, "confidence_threshold")?;
        Ok(())
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let config = VerifierConfig::default();
        assert_eq!(config.confidence_threshold, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_threshold_out_of_range() {
        assert!(VerifierConfig::with_threshold(1.2).validate().is_err());
        assert!(VerifierConfig::with_threshold(-0.5).validate().is_err());
        assert!(VerifierConfig::with_threshold(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_threshold_bounds_are_valid() {
        assert!(VerifierConfig::with_threshold(0.0).validate().is_ok());
        assert!(VerifierConfig::with_threshold(1.0).validate().is_ok());
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = VerifierConfig::with_threshold(0.7);
        let json = serde_json::to_string(&config).unwrap();
        let back: VerifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.confidence_threshold, 0.7);
    }
}
