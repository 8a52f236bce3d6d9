//! Domain types for capture-task verification.
//!
//! This module defines the data that flows through the engine: the quantized
//! inference result emitted by the on-device backend, decoded and ranked
//! confidence scores, capture-task definitions, and the verdict produced by
//! checking one against the other.

pub mod progress;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Raw output of one inference pass, in quantized magnitude/sign form.
///
/// The backend stores absolute values and signs separately: `sign[i] == 0`
/// means `magnitude[i]` is non-negative, `sign[i] == 1` means it is negative.
/// The two vectors must have equal length (one entry per class); the decoder
/// reports a mismatch as an error rather than panicking.
///
/// A result is transient: it is produced per capture attempt, consumed by
/// [`decode`](crate::processors::decode), and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    /// Absolute activation values, one per class.
    pub magnitude: Vec<f32>,
    /// Sign bits: 0 = non-negative, 1 = negative.
    pub sign: Vec<u8>,
}

impl InferenceResult {
    /// Creates a result from separated magnitude and sign vectors.
    pub fn new(magnitude: Vec<f32>, sign: Vec<u8>) -> Self {
        Self { magnitude, sign }
    }

    /// Splits signed activation values into magnitude/sign form.
    ///
    /// This is the representation the quantized backend consumes: the sign
    /// bit is 1 only for strictly negative values.
    pub fn from_values(values: &[f32]) -> Self {
        let mut magnitude = Vec::with_capacity(values.len());
        let mut sign = Vec::with_capacity(values.len());
        for &value in values {
            sign.push(if value < 0.0 { 1 } else { 0 });
            magnitude.push(value.abs());
        }
        Self { magnitude, sign }
    }

    /// Number of classes covered by this result.
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    /// Returns true when the result carries no classes.
    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }
}

/// One decoded per-class confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceEntry {
    /// Index of the class in the model's output vector.
    pub class_index: usize,
    /// Normalized confidence in [0, 1].
    pub score: f32,
}

impl ConfidenceEntry {
    /// Creates a confidence entry.
    pub fn new(class_index: usize, score: f32) -> Self {
        Self { class_index, score }
    }
}

/// Decoded confidences ordered descending by score.
///
/// Ties are broken by ascending class index, so two rankings computed from
/// the same input are byte-for-byte identical. The ordering invariant is
/// established by [`rank`](crate::processors::rank); this type only exposes
/// read access.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedConfidences {
    entries: Vec<ConfidenceEntry>,
}

impl RankedConfidences {
    pub(crate) fn from_sorted(entries: Vec<ConfidenceEntry>) -> Self {
        Self { entries }
    }

    /// Entries in rank order, best first.
    pub fn entries(&self) -> &[ConfidenceEntry] {
        &self.entries
    }

    /// Iterates entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfidenceEntry> {
        self.entries.iter()
    }

    /// The highest-confidence entry, if any.
    pub fn top(&self) -> Option<&ConfidenceEntry> {
        self.entries.first()
    }

    /// Number of ranked entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries were decoded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RankedConfidences {
    type Item = &'a ConfidenceEntry;
    type IntoIter = std::slice::Iter<'a, ConfidenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A declared capture goal: photograph objects of the listed classes.
///
/// Tasks are loaded once at startup by an external configuration collaborator
/// and never mutated afterwards; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureTask {
    /// Unique task id.
    pub id: String,
    /// Short display title.
    pub title: String,
    /// Longer description shown in the task card.
    #[serde(default)]
    pub description: String,
    /// Class labels the capture should contain. May be empty, in which case
    /// the task has no object-presence requirement.
    #[serde(default)]
    pub target_class_labels: BTreeSet<String>,
    /// Minimum number of distinct target classes that must be detected.
    #[serde(default)]
    pub required_distinct_matches: usize,
    /// Optional icon identifier for presentation collaborators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Outcome of checking ranked confidences against one capture task.
///
/// Immutable value data; created fresh per verification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    /// Id of the verified task.
    pub task_id: String,
    /// Whether the task's object-presence requirement is met.
    pub satisfied: bool,
    /// Distinct target labels detected above the threshold.
    pub matched_labels: BTreeSet<String>,
    /// Number of distinct matched labels.
    pub matched_count: usize,
    /// Distinct matches still missing (0 when satisfied).
    pub missing_count: usize,
}

/// Maps a class index to its human-readable label.
///
/// Label metadata is owned outside the core; the verifier only consumes this
/// capability. Unresolvable indexes return `None` and are skipped during
/// verification.
pub trait LabelResolver {
    /// Resolves a class index to its label, if known.
    fn resolve(&self, class_index: usize) -> Option<&str>;
}

impl<T: LabelResolver + ?Sized> LabelResolver for &T {
    fn resolve(&self, class_index: usize) -> Option<&str> {
        (**self).resolve(class_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_splits_sign_and_magnitude() {
        let result = InferenceResult::from_values(&[0.5, -0.25, 0.0]);
        assert_eq!(result.magnitude, vec![0.5, 0.25, 0.0]);
        assert_eq!(result.sign, vec![0, 1, 0]);
    }

    #[test]
    fn test_capture_task_deserializes_with_defaults() {
        let task: CaptureTask =
            serde_json::from_str(r#"{"id": "t1", "title": "Warm-up"}"#).unwrap();
        assert_eq!(task.id, "t1");
        assert!(task.target_class_labels.is_empty());
        assert_eq!(task.required_distinct_matches, 0);
        assert!(task.icon.is_none());
    }

    #[test]
    fn test_ranked_confidences_top() {
        let ranked = RankedConfidences::from_sorted(vec![
            ConfidenceEntry::new(1, 1.0),
            ConfidenceEntry::new(0, 0.25),
        ]);
        assert_eq!(ranked.top().unwrap().class_index, 1);
        assert_eq!(ranked.len(), 2);
    }
}
