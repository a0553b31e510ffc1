use crate::foundation::math::SeededRng;
use crate::plan::model::{Color, LayerShape, LayerSpec, MotionStyle, Plan};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Fixed phrase substituted for blank prompts so a degenerate request
/// still yields the documented default plan.
pub const DEFAULT_PROMPT: &str = "neon city skyline drifting through cosmic auroras";

/// Fixed seed for the prompt hash; changing it re-keys every plan.
const PROMPT_HASH_SEED: u64 = 0x6472_6966_746c_6162;

/// Layer count bounds, inclusive.
const LAYER_COUNT: (usize, usize) = (2, 4);
/// Per-layer density range.
const DENSITY_RANGE: (f64, f64) = (0.15, 0.75);
/// Per-layer base size range in pixels.
const SIZE_RANGE: (f64, f64) = (8.0, 40.0);
/// Clip duration range in seconds; drawn values snap to 0.5 s steps.
const DURATION_RANGE: (f64, f64) = (6.0, 14.0);
/// Tempo range in beats per minute; drawn values snap to whole beats.
const BPM_RANGE: (f64, f64) = (70.0, 140.0);

const SHAPES: [LayerShape; 4] = [
    LayerShape::Particles,
    LayerShape::Orbs,
    LayerShape::Rays,
    LayerShape::Contours,
];

struct PaletteDef {
    background: Color,
    colors: &'static [Color],
}

/// Curated palette table; one entry is picked per plan.
const PALETTES: [PaletteDef; 6] = [
    PaletteDef {
        background: Color::rgb(2, 6, 23),
        colors: &[
            Color::rgb(56, 189, 248),
            Color::rgb(129, 140, 248),
            Color::rgb(192, 132, 252),
            Color::rgb(244, 114, 182),
            Color::rgb(34, 211, 238),
        ],
    },
    PaletteDef {
        background: Color::rgb(28, 25, 23),
        colors: &[
            Color::rgb(249, 115, 22),
            Color::rgb(251, 113, 133),
            Color::rgb(250, 204, 21),
            Color::rgb(253, 164, 175),
        ],
    },
    PaletteDef {
        background: Color::rgb(2, 44, 34),
        colors: &[
            Color::rgb(52, 211, 153),
            Color::rgb(45, 212, 191),
            Color::rgb(167, 243, 208),
            Color::rgb(74, 222, 128),
        ],
    },
    PaletteDef {
        background: Color::rgb(30, 27, 75),
        colors: &[
            Color::rgb(232, 121, 249),
            Color::rgb(167, 139, 250),
            Color::rgb(96, 165, 250),
            Color::rgb(240, 171, 252),
        ],
    },
    PaletteDef {
        background: Color::rgb(42, 18, 5),
        colors: &[
            Color::rgb(252, 165, 165),
            Color::rgb(253, 186, 116),
            Color::rgb(252, 211, 77),
            Color::rgb(254, 240, 138),
        ],
    },
    PaletteDef {
        background: Color::rgb(15, 23, 42),
        colors: &[
            Color::rgb(148, 163, 184),
            Color::rgb(203, 213, 225),
            Color::rgb(226, 232, 240),
            Color::rgb(56, 189, 248),
        ],
    },
];

const TITLE_SUFFIXES: [&str; 6] = [
    "Reverie",
    "Cascade",
    "Transmission",
    "Bloom",
    "Voyage",
    "Signal",
];

const MOODS: [&str; 6] = [
    "hypnotic and luminous",
    "weightless slow-burn",
    "electric nocturne",
    "soft analog haze",
    "kinetic dream state",
    "midnight chrome",
];

/// Normalize a raw prompt: trim, collapse whitespace runs, fall back to
/// [`DEFAULT_PROMPT`] when blank.
pub fn normalize_prompt(raw: &str) -> String {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        DEFAULT_PROMPT.to_owned()
    } else {
        normalized
    }
}

/// Derive the plan seed from a normalized prompt.
///
/// Case-insensitive so trivial casing changes do not re-key the plan.
pub fn derive_seed(normalized_prompt: &str) -> u64 {
    xxh3_64_with_seed(normalized_prompt.to_lowercase().as_bytes(), PROMPT_HASH_SEED)
}

/// Map a prompt to a fully specified [`Plan`].
///
/// Total and pure: every input, including blank, yields a valid plan, and
/// identical prompts yield bit-identical plans. No I/O, no side effects.
#[tracing::instrument(level = "debug", skip(prompt))]
pub fn synthesize(prompt: &str) -> Plan {
    let normalized = normalize_prompt(prompt);
    synthesize_seeded(derive_seed(&normalized), &normalized)
}

/// Synthesize a plan from an explicit seed.
///
/// The prompt text only feeds the title/mood/narrative wording; every
/// other field is derived from the seed alone, in this fixed draw order:
/// motion, layer count, per-layer shape/density/size/variance, palette,
/// duration, bpm, title suffix, mood.
pub fn synthesize_seeded(seed: u64, prompt: &str) -> Plan {
    let mut rng = SeededRng::new(seed);

    let motion = MotionStyle::ALL[rng.next_index(MotionStyle::ALL.len())];

    let (min_layers, max_layers) = LAYER_COUNT;
    let layer_count = min_layers + rng.next_index(max_layers - min_layers + 1);
    let layers: Vec<LayerSpec> = (0..layer_count)
        .map(|_| LayerSpec {
            shape: SHAPES[rng.next_index(SHAPES.len())],
            density: rng.next_range(DENSITY_RANGE.0, DENSITY_RANGE.1),
            size: rng.next_range(SIZE_RANGE.0, SIZE_RANGE.1),
            variance: rng.next_f64(),
        })
        .collect();

    let palette_def = &PALETTES[rng.next_index(PALETTES.len())];
    let duration_secs =
        (rng.next_range(DURATION_RANGE.0, DURATION_RANGE.1) * 2.0).round() / 2.0;
    let bpm = rng.next_range(BPM_RANGE.0, BPM_RANGE.1).round();

    let keywords = prompt_keywords(prompt);
    let suffix = TITLE_SUFFIXES[rng.next_index(TITLE_SUFFIXES.len())];
    let mood = MOODS[rng.next_index(MOODS.len())];

    let title = format!("{} {}", title_case(&keywords), suffix);
    let narrative_beats = vec![
        format!(
            "Open on a {} field condensing out of the dark.",
            keywords[0]
        ),
        format!(
            "{} choreography carries the {} layers at {} BPM.",
            title_word(motion.name()),
            keywords[1 % keywords.len()],
            bpm
        ),
        format!(
            "Grain settles as the {} loop closes on itself.",
            keywords[2 % keywords.len()]
        ),
    ];

    Plan {
        title,
        mood: mood.to_owned(),
        seed,
        palette: palette_def.colors.to_vec(),
        layers,
        motion,
        duration_secs,
        bpm,
        background: palette_def.background,
        narrative_beats,
    }
}

/// Up to three keywords (words of four or more characters) from the
/// prompt, falling back to its leading words, then to `"motion"`.
fn prompt_keywords(prompt: &str) -> Vec<String> {
    let mut words: Vec<String> = prompt
        .split_whitespace()
        .filter(|w| w.chars().count() >= 4)
        .take(3)
        .map(|w| w.to_lowercase())
        .collect();
    if words.is_empty() {
        words = prompt
            .split_whitespace()
            .take(3)
            .map(|w| w.to_lowercase())
            .collect();
    }
    if words.is_empty() {
        words.push("motion".to_owned());
    }
    words
}

fn title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|w| title_word(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/synth.rs"]
mod tests;
