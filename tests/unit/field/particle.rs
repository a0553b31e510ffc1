use super::*;
use crate::plan::synth::synthesize;

#[test]
fn field_count_matches_layer_densities() {
    let plan = synthesize("scatter test field");
    let mut rng = SeededRng::new(plan.seed);
    let particles = build_field(&plan, &mut rng, 720, 720);

    let expected: usize = plan
        .layers
        .iter()
        .map(|l| (l.density * PARTICLES_PER_DENSITY).round() as usize)
        .sum();
    assert_eq!(particles.len(), expected);
}

#[test]
fn every_particle_references_a_plan_layer() {
    let plan = synthesize("layer reference check");
    let mut rng = SeededRng::new(plan.seed);
    for p in build_field(&plan, &mut rng, 720, 720) {
        assert!(p.layer_index < plan.layers.len());
    }
}

#[test]
fn field_is_layer_major_and_stable() {
    let plan = synthesize("ordering check");
    let mut rng_a = SeededRng::new(plan.seed);
    let mut rng_b = SeededRng::new(plan.seed);
    let a = build_field(&plan, &mut rng_a, 720, 720);
    let b = build_field(&plan, &mut rng_b, 720, 720);
    assert_eq!(a, b);

    for pair in a.windows(2) {
        assert!(pair[0].layer_index <= pair[1].layer_index);
    }
}

#[test]
fn attributes_stay_in_their_documented_ranges() {
    let plan = synthesize("attribute bounds");
    let mut rng = SeededRng::new(plan.seed);
    for p in build_field(&plan, &mut rng, 640, 360) {
        assert!((0.0..640.0).contains(&p.x));
        assert!((0.0..360.0).contains(&p.y));
        assert!((0.0..1.0).contains(&p.depth));
        assert!((0.0..1.0).contains(&p.seed));
    }
}
