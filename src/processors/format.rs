//! Textual parse and format of quantized input vectors.
//!
//! Operator tooling feeds input vectors as comma-separated signed decimals.
//! Parsing splits them into the magnitude/sign form the backend consumes;
//! formatting renders a magnitude/sign pair back into the same notation.

use crate::core::errors::ParseError;
use crate::domain::InferenceResult;

/// Parses a comma-separated list of signed decimals into magnitude/sign form.
///
/// Blank components are skipped; an input with no values at all is an error,
/// as is any component that is not a valid number.
pub fn parse_input_vector(input: &str) -> Result<InferenceResult, ParseError> {
    let mut values = Vec::new();
    for raw in input.split(',') {
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        let value: f32 = text.parse().map_err(|_| ParseError::InvalidNumber {
            text: text.to_string(),
        })?;
        values.push(value);
    }
    if values.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(InferenceResult::from_values(&values))
}

/// Formats a magnitude/sign pair as comma-separated signed decimals.
///
/// Returns `None` when the vectors disagree in length.
pub fn format_vector(magnitude: &[f32], sign: &[u8]) -> Option<String> {
    if magnitude.len() != sign.len() {
        return None;
    }
    let rendered: Vec<String> = magnitude
        .iter()
        .zip(sign.iter())
        .map(|(&mag, &s)| {
            if s == 1 {
                format!("-{}", mag)
            } else {
                mag.to_string()
            }
        })
        .collect();
    Some(rendered.join(", "))
}
