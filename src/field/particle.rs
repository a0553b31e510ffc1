use crate::foundation::math::SeededRng;
use crate::plan::model::Plan;

/// Particle count per unit of layer density.
pub const PARTICLES_PER_DENSITY: f64 = 180.0;

/// One particle of the field.
///
/// Built once per render session and never mutated; each frame recomputes
/// the screen transform from these attributes plus the current time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Index of the owning layer in the plan's layer list.
    pub layer_index: usize,
    /// Spawn x in canvas space.
    pub x: f64,
    /// Spawn y in canvas space.
    pub y: f64,
    /// Depth in `[0, 1)`; controls scale and z-ordering feel.
    pub depth: f64,
    /// Per-particle random draw in `[0, 1)`; selects color and offsets
    /// the particle's phase.
    pub seed: f64,
}

/// Instantiate the particle field for a plan.
///
/// Layer-major: all particles of layer 0 first, then layer 1, and so on.
/// Each layer contributes `round(density * PARTICLES_PER_DENSITY)`
/// particles whose attributes are drawn from the shared `rng` in a fixed
/// order (x, y, depth, seed), so a fixed plan seed reproduces the exact
/// field.
pub fn build_field(plan: &Plan, rng: &mut SeededRng, width: u32, height: u32) -> Vec<Particle> {
    let mut particles = Vec::new();
    for (layer_index, layer) in plan.layers.iter().enumerate() {
        let count = (layer.density * PARTICLES_PER_DENSITY).round().max(0.0) as usize;
        particles.reserve(count);
        for _ in 0..count {
            particles.push(Particle {
                layer_index,
                x: rng.next_f64() * f64::from(width),
                y: rng.next_f64() * f64::from(height),
                depth: rng.next_f64(),
                seed: rng.next_f64(),
            });
        }
    }
    particles
}

#[cfg(test)]
#[path = "../../tests/unit/field/particle.rs"]
mod tests;
