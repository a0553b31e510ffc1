//! The particle field: per-session particle construction and the pure
//! motion grammar resolver.

/// Closed-form motion grammar resolver.
pub mod motion;
/// Particle attributes and seeded field construction.
pub mod particle;
