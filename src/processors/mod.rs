//! Pure numeric transforms over inference output.
//!
//! Everything in this module is a synchronous, side-effect-free function:
//! decoding quantized magnitude/sign vectors, ranking confidences, and the
//! textual parse/format helpers for operator tooling.

pub mod decode;
pub mod format;
pub mod ranking;

pub use decode::decode;
pub use format::{format_vector, parse_input_vector};
pub use ranking::rank;
