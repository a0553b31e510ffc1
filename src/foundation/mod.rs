//! Shared foundation types: canvas/timing primitives, the error taxonomy,
//! and the deterministic number sources everything else is built on.

/// Canvas, frame index, and rational fps primitives.
pub mod core;
/// The `DriftlabError` taxonomy and result alias.
pub mod error;
/// Seeded deterministic number sources and blend arithmetic.
pub mod math;
