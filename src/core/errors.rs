//! Error types for the verification engine.
//!
//! This module defines the error taxonomy for the capture-task verification
//! pipeline: decode errors caused by malformed inference output, parse errors
//! from textual input vectors, registry errors, and the engine-level error
//! that wraps them for orchestration. All failures are values; nothing in
//! this crate is fatal to the process.

use thiserror::Error;

/// Errors produced while decoding a quantized inference result.
///
/// Every variant is deterministic for a given input: retrying a decode with
/// identical malformed input yields the same error, so callers should never
/// retry these automatically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The magnitude and sign vectors have different lengths.
    #[error("length mismatch: {magnitude} magnitudes vs {sign} signs")]
    LengthMismatch {
        /// Length of the magnitude vector.
        magnitude: usize,
        /// Length of the sign vector.
        sign: usize,
    },

    /// The inference result is empty (no maximum magnitude exists).
    #[error("empty inference vector")]
    EmptyVector,

    /// A magnitude is NaN or infinite.
    #[error("non-finite magnitude {value} at index {index}")]
    NonFiniteValue {
        /// Index of the offending magnitude.
        index: usize,
        /// The non-finite value encountered.
        value: f32,
    },
}

/// Errors produced while parsing a textual input vector.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input contained no values.
    #[error("input vector is empty")]
    Empty,

    /// A component of the input could not be parsed as a number.
    #[error("invalid number format: {text:?}")]
    InvalidNumber {
        /// The text that failed to parse.
        text: String,
    },
}

/// Errors produced by the task registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No task with the requested id exists.
    #[error("unknown task id: {id}")]
    TaskNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Two tasks in the catalog share an id.
    #[error("duplicate task id: {id}")]
    DuplicateTaskId {
        /// The id that appeared more than once.
        id: String,
    },

    /// The task catalog document could not be deserialized.
    #[error("task catalog parse")]
    Catalog(#[from] serde_json::Error),
}

/// Top-level error for a verification run.
///
/// Wraps the stage-specific errors so orchestration code can propagate a
/// single type with `?` while callers still match on the cause.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed inference output.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Registry lookup or construction failure.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Error raised by the external inference backend.
    #[error("inference backend")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl EngineError {
    /// Wraps an opaque backend error.
    pub fn inference<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        EngineError::Inference(Box::new(error))
    }
}
