use super::*;

fn sample_particle() -> Particle {
    Particle {
        layer_index: 0,
        x: 100.0,
        y: 200.0,
        depth: 0.7,
        seed: 0.31,
    }
}

#[test]
fn resolve_is_pure_for_every_grammar() {
    let p = sample_particle();
    for motion in MotionStyle::ALL {
        let a = resolve(motion, &p, 1.8, 0.4, 0.6);
        let b = resolve(motion, &p, 1.8, 0.4, 0.6);
        assert_eq!(a, b, "{motion:?} must be deterministic");
    }
}

#[test]
fn offsets_stay_bounded() {
    let p = sample_particle();
    for motion in MotionStyle::ALL {
        for step in 0..200 {
            let phase = step as f64 * 0.173;
            let progress = (step as f64 / 200.0).min(1.0);
            let beat = (step as f64 * 0.37).fract();
            let mv = resolve(motion, &p, phase, progress, beat);
            assert!(mv.x_offset.is_finite());
            assert!(mv.y_offset.is_finite());
            assert!(mv.rotation.is_finite());
            assert!(mv.x_offset.abs() <= 2.0, "{motion:?} x out of range");
            assert!(mv.y_offset.abs() <= 2.0, "{motion:?} y out of range");
        }
    }
}

#[test]
fn burst_expands_with_progress() {
    let p = sample_particle();
    let early = resolve(MotionStyle::Burst, &p, 0.9, 0.0, 0.0);
    let late = resolve(MotionStyle::Burst, &p, 0.9, 1.0, 0.0);
    let r_early = early.x_offset.hypot(early.y_offset);
    let r_late = late.x_offset.hypot(late.y_offset);
    assert!(r_late > r_early);
}

#[test]
fn pulse_rotation_tracks_the_beat() {
    let p = sample_particle();
    let mv = resolve(MotionStyle::Pulse, &p, 0.0, 0.0, 0.25);
    assert!((mv.rotation - std::f64::consts::TAU * 0.25).abs() < 1e-12);
}

#[test]
fn particle_seed_desynchronizes_neighbors() {
    let mut a = sample_particle();
    let mut b = sample_particle();
    a.seed = 0.1;
    b.seed = 0.9;
    let mv_a = resolve(MotionStyle::Drift, &a, 1.0, 0.5, 0.0);
    let mv_b = resolve(MotionStyle::Drift, &b, 1.0, 0.5, 0.0);
    assert_ne!(mv_a, mv_b);
}
