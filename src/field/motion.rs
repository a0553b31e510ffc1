use crate::field::particle::Particle;
use crate::plan::model::MotionStyle;
use std::f64::consts::TAU;

/// Unitless displacement plus rotation for one particle at one instant.
///
/// Offsets are later scaled by canvas dimensions by the compositor;
/// rotation is radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionVector {
    /// Horizontal offset, unitless.
    pub x_offset: f64,
    /// Vertical offset, unitless.
    pub y_offset: f64,
    /// Rotation in radians.
    pub rotation: f64,
}

/// Resolve a motion grammar to a displacement/rotation vector.
///
/// Pure and stateless: identical inputs always yield identical outputs.
/// `phase` is the particle's desynchronized time oscillator, `progress`
/// the render completion fraction in `[0, 1]`, `beat_phase` the
/// fractional position within the current beat.
pub fn resolve(
    motion: MotionStyle,
    particle: &Particle,
    phase: f64,
    progress: f64,
    beat_phase: f64,
) -> MotionVector {
    let wobble = (phase + particle.seed * 6.0).sin() * 0.5;
    let drift = ((phase * 0.7).cos() + (progress * TAU).sin()) * 0.1;

    match motion {
        MotionStyle::Orbital => MotionVector {
            x_offset: phase.cos() * (0.4 + particle.depth * 0.6),
            y_offset: (phase * 0.9 + wobble).sin() * (0.4 + particle.depth * 0.5),
            rotation: phase * 0.3,
        },
        MotionStyle::Pulse => MotionVector {
            x_offset: (phase + beat_phase * TAU).sin() * 0.5 * particle.depth,
            y_offset: (phase * 1.2).cos() * 0.5 * particle.depth,
            rotation: beat_phase * TAU,
        },
        MotionStyle::Ribbon => MotionVector {
            x_offset: (phase * 0.6).sin() * 0.8 * particle.depth,
            y_offset: ((phase * 0.6 + wobble).cos() + drift) * 0.5,
            rotation: (progress * TAU).sin() * 0.6,
        },
        MotionStyle::Burst => MotionVector {
            x_offset: phase.cos() * (0.2 + progress * 0.8),
            y_offset: (phase * 1.4).sin() * (0.2 + progress * 0.8),
            rotation: progress * TAU + wobble,
        },
        MotionStyle::Drift => MotionVector {
            x_offset: phase.sin() * 0.6,
            y_offset: (phase * 0.8 + wobble).cos() * 0.6,
            rotation: drift,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/motion.rs"]
mod tests;
