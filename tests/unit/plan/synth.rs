use super::*;

#[test]
fn synthesize_is_deterministic() {
    let a = synthesize("neon city skyline drifting through cosmic auroras");
    let b = synthesize("neon city skyline drifting through cosmic auroras");
    assert_eq!(a, b);
}

#[test]
fn blank_prompts_fall_back_to_the_default_plan() {
    let default = synthesize(DEFAULT_PROMPT);
    assert_eq!(synthesize(""), default);
    assert_eq!(synthesize("   "), default);
    assert_eq!(synthesize("\t\n"), default);
}

#[test]
fn whitespace_and_case_do_not_re_key_the_seed() {
    let a = synthesize("neon   city \t skyline");
    let b = synthesize("neon city skyline");
    assert_eq!(a, b);
    assert_eq!(
        derive_seed(&normalize_prompt("NEON City Skyline")),
        derive_seed(&normalize_prompt("neon city skyline")),
    );
}

#[test]
fn every_plan_respects_the_documented_ranges() {
    let prompts = [
        DEFAULT_PROMPT,
        "a",
        "slow tidal glass gardens",
        "ember storms over obsidian dunes breaking into fractal surf",
        "0123456789",
        "%%% !!! ???",
    ];
    for prompt in prompts {
        let plan = synthesize(prompt);
        assert!(plan.validate().is_ok(), "invalid plan for '{prompt}'");
        assert!((2..=4).contains(&plan.layers.len()));
        assert!(plan.palette.len() >= 3);
        assert!((6.0..=14.0).contains(&plan.duration_secs));
        assert!((70.0..=140.0).contains(&plan.bpm));
        for layer in &plan.layers {
            assert!((0.15..0.75).contains(&layer.density));
            assert!((8.0..40.0).contains(&layer.size));
            assert!((0.0..1.0).contains(&layer.variance));
        }
        assert_eq!(plan.narrative_beats.len(), 3);
        assert!(!plan.title.is_empty());
        assert!(!plan.mood.is_empty());
    }
}

#[test]
fn unrelated_prompts_get_distinct_seeds() {
    let seeds: Vec<u64> = [
        "neon city",
        "ocean floor",
        "desert bloom",
        "static hymn",
        "velvet orbit",
    ]
    .iter()
    .map(|p| synthesize(p).seed)
    .collect();
    let mut unique = seeds.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), seeds.len());
}

#[test]
fn equal_seeds_yield_identical_generator_derived_fields() {
    // Two different prompts forced onto the same seed: everything except
    // the prompt-derived wording must match, documenting the seed as the
    // sole randomness source.
    let a = synthesize_seeded(0xABCD, "crystal rivers");
    let b = synthesize_seeded(0xABCD, "molten static");
    assert_eq!(a.seed, b.seed);
    assert_eq!(a.palette, b.palette);
    assert_eq!(a.layers, b.layers);
    assert_eq!(a.motion, b.motion);
    assert_eq!(a.duration_secs, b.duration_secs);
    assert_eq!(a.bpm, b.bpm);
    assert_eq!(a.background, b.background);
    assert_ne!(a.title, b.title);
}

#[test]
fn equal_seed_and_prompt_is_bit_identical() {
    let a = synthesize_seeded(99, "same words");
    let b = synthesize_seeded(99, "same words");
    assert_eq!(a, b);
}

#[test]
fn scenario_prompt_produces_renderable_bounds() {
    let plan = synthesize("neon city skyline drifting through cosmic auroras");
    assert!((6.0..=14.0).contains(&plan.duration_secs));
    assert!(!plan.layers.is_empty());
    assert!(plan.palette.len() >= 3);
}

#[test]
fn keywords_survive_into_title_and_narrative() {
    let plan = synthesize("glacial light wells");
    assert!(plan.title.to_lowercase().contains("glacial"));
    assert!(
        plan.narrative_beats
            .iter()
            .any(|b| b.contains("glacial") || b.contains("light") || b.contains("wells"))
    );
}
