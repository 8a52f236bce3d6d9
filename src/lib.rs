//! # Capture Verify
//!
//! A verification engine for capture tasks backed by quantized on-device
//! inference. The engine decodes a model's raw magnitude/sign output into
//! ranked, normalized per-class confidence scores and decides whether a
//! captured image satisfies a declared capture task's object-presence
//! requirements.
//!
//! ## Components
//!
//! - **Decoder**: converts magnitude/sign vectors into normalized confidence
//!   scores (negative-signed activations are clamped to zero)
//! - **Ranker**: orders confidences descending, deterministically
//! - **Task Registry**: immutable catalog of capture-task definitions
//! - **Verifier**: matches ranked confidences against a task's target class
//!   set and required distinct-match count
//! - **Execution Wrapper**: retryable async orchestration with observable
//!   idle/loading/success/failed state
//!
//! Data flows one direction: raw inference output → decode → rank → verify →
//! verdict.
//!
//! ## Modules
//!
//! * [`core`] - Errors, configuration, and the task registry
//! * [`domain`] - Data types flowing through the engine
//! * [`processors`] - Pure numeric transforms (decode, rank, parse/format)
//! * [`verifier`] - The pass/fail decision policy
//! * [`pipeline`] - Orchestration and the async execution wrapper
//! * [`utils`] - Class label table
//!
//! ## Quick Start
//!
//! ```rust
//! use capture_verify::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = TaskRegistry::from_json(
//!     r#"[{"id": "pets", "title": "Capture a pet",
//!          "target_class_labels": ["cat", "dog"],
//!          "required_distinct_matches": 1}]"#,
//! )?;
//! let labels = ClassLabelTable::from_labels(["cat", "dog", "bird"]);
//! let engine = VerificationEngine::new(registry, labels, VerifierConfig::default());
//!
//! // One capture attempt's quantized inference output.
//! let result = InferenceResult::new(vec![0.2, 0.8, 0.4], vec![0, 0, 1]);
//! let outcome = engine.verify_result("pets", &result)?;
//! assert!(outcome.verdict.satisfied);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod pipeline;
pub mod processors;
pub mod utils;
pub mod verifier;

/// Commonly used types, re-exported for convenience.
pub mod prelude {
    pub use crate::core::{
        ConfigError, ConfigValidator, DecodeError, EngineError, ParseError, RegistryError,
        TaskRegistry, VerifierConfig,
    };
    pub use crate::domain::progress::{OverallProgress, TaskProgress, TaskStatus};
    pub use crate::domain::{
        CaptureTask, ConfidenceEntry, InferenceResult, LabelResolver, RankedConfidences,
        VerificationVerdict,
    };
    pub use crate::pipeline::{
        Execution, ExecutionState, InferenceBackend, VerificationEngine, VerificationOutcome,
    };
    pub use crate::processors::{decode, format_vector, parse_input_vector, rank};
    pub use crate::utils::ClassLabelTable;
    pub use crate::verifier::TaskVerifier;
}

/// Initializes the tracing subscriber for logging.
///
/// Sets up the subscriber with an environment filter and formatting layer.
/// Typically called once at application start.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
