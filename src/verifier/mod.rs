//! Task verification.
//!
//! The verifier decides whether a ranked confidence list satisfies a capture
//! task's object-presence requirement: at least `required_distinct_matches`
//! *different* target classes detected above the confidence threshold.
//! Counting is by distinct label, not by raw detection: two chairs in frame
//! still satisfy only one "chair" requirement, because tasks express class
//! diversity, not object count.

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::config::VerifierConfig;
use crate::domain::{CaptureTask, LabelResolver, RankedConfidences, VerificationVerdict};

/// Checks ranked confidences against capture tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskVerifier {
    config: VerifierConfig,
}

impl TaskVerifier {
    /// Creates a verifier with the given configuration.
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    /// The configured confidence threshold.
    pub fn confidence_threshold(&self) -> f32 {
        self.config.confidence_threshold
    }

    /// Produces a verdict for one task.
    ///
    /// A task with no target labels has no object-presence requirement and
    /// is always satisfied. Otherwise entries at or above the threshold are
    /// resolved to labels; each resolved label that belongs to the task's
    /// target set counts once. Unresolvable class indexes are skipped; they
    /// can never satisfy a task. Neither `task` nor `ranked` is mutated.
    pub fn verify<R: LabelResolver>(
        &self,
        task: &CaptureTask,
        ranked: &RankedConfidences,
        labels: R,
    ) -> VerificationVerdict {
        if task.target_class_labels.is_empty() {
            return VerificationVerdict {
                task_id: task.id.clone(),
                satisfied: true,
                matched_labels: BTreeSet::new(),
                matched_count: 0,
                missing_count: 0,
            };
        }

        let mut matched_labels = BTreeSet::new();
        for entry in ranked {
            if entry.score < self.config.confidence_threshold {
                // Ranked order is descending; nothing below can pass either.
                break;
            }
            let Some(label) = labels.resolve(entry.class_index) else {
                continue;
            };
            if task.target_class_labels.contains(label) {
                matched_labels.insert(label.to_string());
            }
        }

        let matched_count = matched_labels.len();
        let missing_count = task.required_distinct_matches.saturating_sub(matched_count);
        let satisfied = matched_count >= task.required_distinct_matches;
        debug!(
            task_id = %task.id,
            matched_count,
            missing_count,
            satisfied,
            "verified capture task"
        );

        VerificationVerdict {
            task_id: task.id.clone(),
            satisfied,
            matched_labels,
            matched_count,
            missing_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfidenceEntry;
    use crate::processors::rank;
    use crate::utils::ClassLabelTable;

    fn task(labels: &[&str], required: usize) -> CaptureTask {
        CaptureTask {
            id: "task-1".to_string(),
            title: "Capture a varied scene".to_string(),
            description: String::new(),
            target_class_labels: labels.iter().map(|s| s.to_string()).collect(),
            required_distinct_matches: required,
            icon: None,
        }
    }

    fn ranked(entries: Vec<(usize, f32)>) -> RankedConfidences {
        rank(
            entries
                .into_iter()
                .map(|(index, score)| ConfidenceEntry::new(index, score))
                .collect(),
        )
    }

    #[test]
    fn test_single_match_satisfies() {
        let verifier = TaskVerifier::default();
        let labels = ClassLabelTable::from_labels(["cat", "dog"]);
        let verdict = verifier.verify(&task(&["cat", "dog"], 1), &ranked(vec![(1, 1.0)]), &labels);
        assert!(verdict.satisfied);
        assert_eq!(verdict.matched_count, 1);
        assert_eq!(verdict.missing_count, 0);
        assert!(verdict.matched_labels.contains("dog"));
    }

    #[test]
    fn test_empty_target_labels_always_satisfied() {
        let verifier = TaskVerifier::default();
        let labels = ClassLabelTable::from_labels(["cat"]);
        let verdict = verifier.verify(&task(&[], 3), &ranked(vec![(0, 0.1)]), &labels);
        assert!(verdict.satisfied);
        assert_eq!(verdict.matched_count, 0);
    }

    #[test]
    fn test_below_threshold_does_not_match() {
        let verifier = TaskVerifier::default();
        let labels = ClassLabelTable::from_labels(["cat"]);
        let verdict = verifier.verify(&task(&["cat"], 1), &ranked(vec![(0, 0.49)]), &labels);
        assert!(!verdict.satisfied);
        assert_eq!(verdict.missing_count, 1);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let verifier = TaskVerifier::default();
        let labels = ClassLabelTable::from_labels(["cat"]);
        let verdict = verifier.verify(&task(&["cat"], 1), &ranked(vec![(0, 0.5)]), &labels);
        assert!(verdict.satisfied);
    }

    #[test]
    fn test_duplicate_detections_count_once() {
        // Two class indexes resolving to the same label must not satisfy a
        // two-distinct-classes requirement.
        let verifier = TaskVerifier::default();
        let labels = ClassLabelTable::from_labels(["chair", "chair", "table"]);
        let verdict = verifier.verify(
            &task(&["chair", "table"], 2),
            &ranked(vec![(0, 1.0), (1, 0.9)]),
            &labels,
        );
        assert!(!verdict.satisfied);
        assert_eq!(verdict.matched_count, 1);
        assert_eq!(verdict.missing_count, 1);
    }

    #[test]
    fn test_distinct_matches_accumulate() {
        let verifier = TaskVerifier::default();
        let labels = ClassLabelTable::from_labels(["chair", "table", "lamp"]);
        let verdict = verifier.verify(
            &task(&["chair", "table"], 2),
            &ranked(vec![(0, 0.9), (1, 0.8), (2, 0.7)]),
            &labels,
        );
        assert!(verdict.satisfied);
        assert_eq!(verdict.matched_count, 2);
        assert_eq!(
            verdict.matched_labels,
            ["chair", "table"].iter().map(|s| s.to_string()).collect()
        );
    }

    #[test]
    fn test_unresolvable_index_is_skipped() {
        let verifier = TaskVerifier::default();
        let labels = ClassLabelTable::from_labels(["cat"]);
        let verdict = verifier.verify(
            &task(&["cat"], 1),
            &ranked(vec![(9, 1.0), (0, 0.8)]),
            &labels,
        );
        assert!(verdict.satisfied);
        assert_eq!(verdict.matched_count, 1);
    }

    #[test]
    fn test_non_target_label_does_not_match() {
        let verifier = TaskVerifier::default();
        let labels = ClassLabelTable::from_labels(["bicycle"]);
        let verdict = verifier.verify(&task(&["cat"], 1), &ranked(vec![(0, 1.0)]), &labels);
        assert!(!verdict.satisfied);
        assert!(verdict.matched_labels.is_empty());
    }

    #[test]
    fn test_zero_required_matches_is_satisfied_without_detections() {
        let verifier = TaskVerifier::default();
        let labels = ClassLabelTable::from_labels(["cat"]);
        let verdict = verifier.verify(&task(&["cat"], 0), &ranked(vec![(0, 0.1)]), &labels);
        assert!(verdict.satisfied);
        assert_eq!(verdict.matched_count, 0);
        assert_eq!(verdict.missing_count, 0);
    }

    #[test]
    fn test_custom_threshold() {
        let verifier = TaskVerifier::new(VerifierConfig::with_threshold(0.9));
        let labels = ClassLabelTable::from_labels(["cat"]);
        let verdict = verifier.verify(&task(&["cat"], 1), &ranked(vec![(0, 0.8)]), &labels);
        assert!(!verdict.satisfied);
    }
}
