//! Confidence ranking.

use crate::domain::{ConfidenceEntry, RankedConfidences};

/// Orders confidence entries descending by score.
///
/// Ties are broken by ascending class index, so the output is deterministic:
/// ranking the same entries twice yields byte-for-byte identical results.
/// This holds regardless of how the entries were produced; the decoder relies
/// on it, and verification audits replay it.
pub fn rank(mut entries: Vec<ConfidenceEntry>) -> RankedConfidences {
    entries.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.class_index.cmp(&b.class_index))
    });
    RankedConfidences::from_sorted(entries)
}
