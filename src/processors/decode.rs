//! Quantized inference result decoding.
//!
//! The on-device backend emits activations in magnitude/sign form. Decoding
//! turns that pair of vectors into normalized per-class confidence scores:
//! each magnitude is divided by the vector's maximum, and negative-signed
//! entries are clamped to zero. A negative activation never counts toward
//! object confidence, whatever its magnitude.

use tracing::debug;

use crate::core::errors::DecodeError;
use crate::domain::{ConfidenceEntry, InferenceResult, RankedConfidences};
use crate::processors::ranking::rank;

/// Decodes a quantized inference result into ranked, normalized confidences.
///
/// Pure function of its input. Fails on malformed output (mismatched vector
/// lengths, empty vectors, non-finite magnitudes); an all-zero magnitude
/// vector is valid low-confidence input and decodes to all-zero scores.
pub fn decode(result: &InferenceResult) -> Result<RankedConfidences, DecodeError> {
    if result.magnitude.len() != result.sign.len() {
        return Err(DecodeError::LengthMismatch {
            magnitude: result.magnitude.len(),
            sign: result.sign.len(),
        });
    }
    if result.magnitude.is_empty() {
        return Err(DecodeError::EmptyVector);
    }

    let mut max_mag = 0.0f32;
    for (index, &value) in result.magnitude.iter().enumerate() {
        if !value.is_finite() {
            return Err(DecodeError::NonFiniteValue { index, value });
        }
        if value > max_mag {
            max_mag = value;
        }
    }

    let entries: Vec<ConfidenceEntry> = result
        .magnitude
        .iter()
        .zip(result.sign.iter())
        .enumerate()
        .map(|(class_index, (&magnitude, &sign))| {
            // max_mag == 0 means every magnitude is 0; score 0 across the
            // board instead of dividing by zero.
            let score = if sign == 1 || max_mag == 0.0 {
                0.0
            } else {
                magnitude / max_mag
            };
            ConfidenceEntry::new(class_index, score)
        })
        .collect();

    debug!(classes = entries.len(), max_mag, "decoded inference result");
    Ok(rank(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_normalizes_by_max_magnitude() {
        let result = InferenceResult::new(vec![0.2, 0.8, 0.4], vec![0, 0, 1]);
        let ranked = decode(&result).unwrap();
        let pairs: Vec<(usize, f32)> = ranked.iter().map(|e| (e.class_index, e.score)).collect();
        assert_eq!(pairs, vec![(1, 1.0), (0, 0.25), (2, 0.0)]);
    }

    #[test]
    fn test_decode_negative_sign_forces_zero() {
        let result = InferenceResult::new(vec![5.0, 1.0], vec![1, 0]);
        let ranked = decode(&result).unwrap();
        // The largest magnitude is negative-signed; it still sets the
        // normalization base but scores zero itself.
        assert_eq!(ranked.top().unwrap().class_index, 1);
        assert_eq!(ranked.top().unwrap().score, 0.2);
        assert_eq!(ranked.entries()[1].score, 0.0);
    }

    #[test]
    fn test_decode_all_zero_magnitudes() {
        let result = InferenceResult::new(vec![0.0, 0.0, 0.0], vec![0, 0, 0]);
        let ranked = decode(&result).unwrap();
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|e| e.score == 0.0));
    }

    #[test]
    fn test_decode_length_mismatch() {
        let result = InferenceResult::new(vec![0.1, 0.2], vec![0]);
        assert_eq!(
            decode(&result),
            Err(DecodeError::LengthMismatch {
                magnitude: 2,
                sign: 1
            })
        );
    }

    #[test]
    fn test_decode_empty_vector() {
        let result = InferenceResult::new(vec![], vec![]);
        assert_eq!(decode(&result), Err(DecodeError::EmptyVector));
    }

    #[test]
    fn test_decode_non_finite_magnitude() {
        let result = InferenceResult::new(vec![0.1, f32::NAN], vec![0, 0]);
        match decode(&result) {
            Err(DecodeError::NonFiniteValue { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected NonFiniteValue, got {:?}", other),
        }
        let result = InferenceResult::new(vec![f32::INFINITY], vec![0]);
        assert!(matches!(
            decode(&result),
            Err(DecodeError::NonFiniteValue { index: 0, .. })
        ));
    }

    #[test]
    fn test_decode_scores_stay_in_unit_range() {
        let result = InferenceResult::new(vec![3.5, 7.0, 0.1, 7.0], vec![0, 0, 0, 1]);
        let ranked = decode(&result).unwrap();
        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|e| (0.0..=1.0).contains(&e.score)));
    }
}
