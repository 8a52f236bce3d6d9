//! Verification pipeline.
//!
//! Glues the stages together: acquire an inference result from the opaque
//! backend, decode it into ranked confidences, and verify those against a
//! registered capture task. The engine owns the registry, the verifier, and
//! the class-label table; each run is an independent, stateless pass.

pub mod execution;

use std::future::Future;

use tracing::debug;

use crate::core::config::VerifierConfig;
use crate::core::errors::EngineError;
use crate::core::registry::TaskRegistry;
use crate::domain::{InferenceResult, RankedConfidences, VerificationVerdict};
use crate::processors::decode;
use crate::utils::ClassLabelTable;
use crate::verifier::TaskVerifier;

pub use execution::{Execution, ExecutionState};

/// Source of inference results for capture attempts.
///
/// The backend is external and opaque; awaiting it is the pipeline's only
/// suspension point. Implementations typically bridge to an on-device or
/// on-chain quantized model runtime.
pub trait InferenceBackend {
    /// Runs one inference pass over the current capture.
    fn infer(&self) -> impl Future<Output = Result<InferenceResult, EngineError>> + Send;
}

/// Result of one verification run: the verdict plus the ranked scores it was
/// derived from, so presentation collaborators can show both.
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// Pass/fail decision for the task.
    pub verdict: VerificationVerdict,
    /// Decoded confidences, best first.
    pub ranked: RankedConfidences,
}

/// Orchestrates acquire → decode → verify for registered capture tasks.
#[derive(Debug, Clone)]
pub struct VerificationEngine {
    registry: TaskRegistry,
    verifier: TaskVerifier,
    labels: ClassLabelTable,
}

impl VerificationEngine {
    /// Creates an engine over a task catalog and class-label table.
    pub fn new(registry: TaskRegistry, labels: ClassLabelTable, config: VerifierConfig) -> Self {
        Self {
            registry,
            verifier: TaskVerifier::new(config),
            labels,
        }
    }

    /// The task catalog.
    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Runs one capture attempt against the task with the given id.
    ///
    /// Looks the task up first so an unknown id fails before any inference
    /// is spent on it.
    pub async fn run_task<B: InferenceBackend>(
        &self,
        task_id: &str,
        backend: &B,
    ) -> Result<VerificationOutcome, EngineError> {
        let task = self.registry.lookup(task_id)?;
        debug!(task_id, "starting verification run");

        let result = backend.infer().await?;
        let ranked = decode(&result)?;
        let verdict = self.verifier.verify(task, &ranked, &self.labels);

        Ok(VerificationOutcome { verdict, ranked })
    }

    /// Verifies an already-acquired inference result against a task.
    ///
    /// Synchronous variant of [`run_task`](Self::run_task) for callers that
    /// drive the backend themselves.
    pub fn verify_result(
        &self,
        task_id: &str,
        result: &InferenceResult,
    ) -> Result<VerificationOutcome, EngineError> {
        let task = self.registry.lookup(task_id)?;
        let ranked = decode(result)?;
        let verdict = self.verifier.verify(task, &ranked, &self.labels);
        Ok(VerificationOutcome { verdict, ranked })
    }
}
