//! Utility types shared across the engine.

pub mod labels;

pub use labels::ClassLabelTable;
