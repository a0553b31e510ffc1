use super::*;

#[test]
fn rng_is_deterministic_across_instances() {
    let mut a = SeededRng::new(42);
    let mut b = SeededRng::new(42);
    for _ in 0..10_000 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn distinct_seeds_diverge() {
    let mut a = SeededRng::new(1);
    let mut b = SeededRng::new(2);
    let a_draws: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
    let b_draws: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
    assert_ne!(a_draws, b_draws);
}

#[test]
fn next_f64_stays_in_unit_interval() {
    let mut rng = SeededRng::new(0xDEAD_BEEF);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn next_range_respects_bounds() {
    let mut rng = SeededRng::new(7);
    for _ in 0..1_000 {
        let v = rng.next_range(6.0, 14.0);
        assert!((6.0..14.0).contains(&v));
    }
}

#[test]
fn next_index_never_exceeds_len() {
    let mut rng = SeededRng::new(99);
    for _ in 0..1_000 {
        assert!(rng.next_index(5) < 5);
    }
    assert_eq!(rng.next_index(0), 0);
}

#[test]
fn mul_div255_identities() {
    for x in [0u16, 1, 64, 127, 200, 255] {
        assert_eq!(mul_div255(x, 255), x as u8);
        assert_eq!(mul_div255(x, 0), 0);
    }
}
