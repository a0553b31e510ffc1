use crate::foundation::error::{DriftlabError, DriftlabResult};
use crate::foundation::math::mul_div255;
use serde::{Deserialize, Serialize};

/// An sRGB color, serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Build a color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(s: &str) -> DriftlabResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(DriftlabError::validation(format!(
                "color must be '#rrggbb', got '{s}'"
            )));
        }
        let parse = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| DriftlabError::validation(format!("invalid hex color '{s}'")))
        };
        Ok(Self {
            r: parse(0)?,
            g: parse(2)?,
            b: parse(4)?,
        })
    }

    /// Format as a `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to premultiplied RGBA8 at `opacity` in `[0, 1]`.
    pub(crate) fn premul(self, opacity: f32) -> [u8; 4] {
        let a = ((opacity.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16;
        [
            mul_div255(u16::from(self.r), a),
            mul_div255(u16::from(self.g), a),
            mul_div255(u16::from(self.b), a),
            a as u8,
        ]
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Shape drawn for every particle of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerShape {
    /// Small radial-gradient discs.
    Particles,
    /// Larger radial-gradient discs.
    Orbs,
    /// Stroked lines whose thickness scales with depth.
    Rays,
    /// Closed wobble contours perturbed by the layer variance.
    Contours,
}

/// One layer of the particle field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Shape drawn for this layer's particles.
    pub shape: LayerShape,
    /// Particle count control in `[0, 1]`.
    pub density: f64,
    /// Base render radius/length in pixels, positive.
    pub size: f64,
    /// Perturbation magnitude in `[0, 1]` for wobble shapes.
    pub variance: f64,
}

impl LayerSpec {
    fn validate(&self) -> DriftlabResult<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(DriftlabError::validation("layer density must be in [0, 1]"));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(DriftlabError::validation("layer size must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.variance) {
            return Err(DriftlabError::validation("layer variance must be in [0, 1]"));
        }
        Ok(())
    }
}

/// Named closed-form rule translating time/progress into particle motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionStyle {
    /// Circular drift scaled by depth.
    Orbital,
    /// Beat-synchronized radial pulsing.
    Pulse,
    /// Lateral sinusoidal sweep with drift.
    Ribbon,
    /// Outward acceleration keyed to progress.
    Burst,
    /// Gentle ambient sway (default grammar).
    Drift,
}

impl MotionStyle {
    /// All grammars, in synthesis pick order.
    pub const ALL: [MotionStyle; 5] = [
        MotionStyle::Orbital,
        MotionStyle::Pulse,
        MotionStyle::Ribbon,
        MotionStyle::Burst,
        MotionStyle::Drift,
    ];

    /// Lower-case grammar name as used in narrative copy.
    pub fn name(self) -> &'static str {
        match self {
            MotionStyle::Orbital => "orbital",
            MotionStyle::Pulse => "pulse",
            MotionStyle::Ribbon => "ribbon",
            MotionStyle::Burst => "burst",
            MotionStyle::Drift => "drift",
        }
    }
}

/// The immutable, deterministically derived specification of one clip.
///
/// Produced once per generation request by [`crate::plan::synth::synthesize`];
/// `seed` is the sole source of all subsequent randomness for the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Display title derived from prompt keywords.
    pub title: String,
    /// Short mood description.
    pub mood: String,
    /// Seed deterministically derived from the prompt.
    pub seed: u64,
    /// Ordered, non-empty color set; order is the stable index used for
    /// particle coloring.
    pub palette: Vec<Color>,
    /// Ordered, non-empty layer set.
    pub layers: Vec<LayerSpec>,
    /// Motion grammar for every particle.
    pub motion: MotionStyle,
    /// Clip duration in seconds, positive and finite.
    pub duration_secs: f64,
    /// Tempo driving the periodic beat phase, positive.
    pub bpm: f64,
    /// Background fill color.
    pub background: Color,
    /// Display-only narrative copy; no computational role.
    pub narrative_beats: Vec<String>,
}

impl Plan {
    /// Check the plan invariants.
    pub fn validate(&self) -> DriftlabResult<()> {
        if self.palette.is_empty() {
            return Err(DriftlabError::validation("plan palette must be non-empty"));
        }
        if self.layers.is_empty() {
            return Err(DriftlabError::validation("plan layers must be non-empty"));
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(DriftlabError::validation("plan duration must be > 0"));
        }
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            return Err(DriftlabError::validation("plan bpm must be > 0"));
        }
        Ok(())
    }

    /// Derived output filename: lower-cased title, whitespace runs
    /// replaced with `-`, plus the given extension.
    pub fn suggested_filename(&self, ext: &str) -> String {
        let stem: Vec<String> = self
            .title
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        let stem = if stem.is_empty() {
            "untitled".to_owned()
        } else {
            stem.join("-")
        };
        format!("{stem}.{ext}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/model.rs"]
mod tests;
