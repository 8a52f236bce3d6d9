//! Core building blocks of the verification engine.
//!
//! This module contains the foundational pieces the rest of the crate is
//! built on:
//! - Error taxonomy for decode, parse, registry, and engine failures
//! - Configuration structures and validation
//! - The immutable capture-task registry
//!
//! It re-exports the commonly used types for convenience.

pub mod config;
pub mod errors;
pub mod registry;
pub mod validation;

pub use config::{ConfigError, ConfigValidator, VerifierConfig};
pub use errors::{DecodeError, EngineError, ParseError, RegistryError};
pub use registry::TaskRegistry;
