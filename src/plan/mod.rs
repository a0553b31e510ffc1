//! Plan synthesis: a pure, seeded mapping from prompt text to a fully
//! specified animation plan.

/// The `Plan` data model: layers, palette, motion grammar.
pub mod model;
/// Prompt normalization, seed derivation, and plan synthesis.
pub mod synth;
