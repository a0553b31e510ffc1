use super::*;

fn sample_plan() -> Plan {
    Plan {
        title: "Neon City Reverie".to_owned(),
        mood: "electric nocturne".to_owned(),
        seed: 7,
        palette: vec![Color::rgb(56, 189, 248), Color::rgb(244, 114, 182)],
        layers: vec![LayerSpec {
            shape: LayerShape::Orbs,
            density: 0.5,
            size: 20.0,
            variance: 0.3,
        }],
        motion: MotionStyle::Orbital,
        duration_secs: 8.0,
        bpm: 110.0,
        background: Color::rgb(2, 6, 23),
        narrative_beats: vec!["one".to_owned()],
    }
}

#[test]
fn color_hex_round_trips() {
    let c = Color::from_hex("#38bdf8").unwrap();
    assert_eq!(c, Color::rgb(0x38, 0xbd, 0xf8));
    assert_eq!(c.to_hex(), "#38bdf8");
    assert_eq!(Color::from_hex("38bdf8").unwrap(), c);
}

#[test]
fn color_rejects_malformed_hex() {
    assert!(Color::from_hex("#38bdf").is_err());
    assert!(Color::from_hex("#38bdfg").is_err());
    assert!(Color::from_hex("").is_err());
}

#[test]
fn color_premul_scales_channels() {
    let c = Color::rgb(200, 100, 0);
    assert_eq!(c.premul(1.0), [200, 100, 0, 255]);
    assert_eq!(c.premul(0.0), [0, 0, 0, 0]);
    let half = c.premul(0.5);
    assert_eq!(half[3], 128);
    assert!((i32::from(half[0]) - 100).abs() <= 1);
}

#[test]
fn plan_serde_round_trips_with_hex_colors() {
    let plan = sample_plan();
    let json = serde_json::to_string(&plan).unwrap();
    assert!(json.contains("\"#38bdf8\""));
    assert!(json.contains("\"orbs\""));
    assert!(json.contains("\"orbital\""));
    let back: Plan = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn validate_rejects_broken_invariants() {
    let mut p = sample_plan();
    p.palette.clear();
    assert!(p.validate().is_err());

    let mut p = sample_plan();
    p.layers.clear();
    assert!(p.validate().is_err());

    let mut p = sample_plan();
    p.layers[0].density = 1.5;
    assert!(p.validate().is_err());

    let mut p = sample_plan();
    p.layers[0].size = 0.0;
    assert!(p.validate().is_err());

    let mut p = sample_plan();
    p.duration_secs = 0.0;
    assert!(p.validate().is_err());

    let mut p = sample_plan();
    p.bpm = -1.0;
    assert!(p.validate().is_err());

    assert!(sample_plan().validate().is_ok());
}

#[test]
fn suggested_filename_slugs_the_title() {
    let plan = sample_plan();
    assert_eq!(plan.suggested_filename("mp4"), "neon-city-reverie.mp4");

    let mut untitled = sample_plan();
    untitled.title = "   ".to_owned();
    assert_eq!(untitled.suggested_filename("mp4"), "untitled.mp4");
}

#[test]
fn motion_style_names_are_lowercase() {
    for m in MotionStyle::ALL {
        let name = m.name();
        assert_eq!(name, name.to_lowercase());
    }
}
