//! driftlab turns a short free-text prompt into a looping procedural
//! particle animation and exports it as an encoded video clip.
//!
//! The pipeline is deterministic end to end: the prompt is hashed to a
//! seed, the seed drives plan synthesis (palette, layers, motion grammar,
//! tempo, duration, narrative copy), and the same seed reproduces the
//! particle field and film grain, so a given prompt always renders the
//! same clip.
//!
//! - Map a prompt to a [`Plan`] with [`synthesize`]
//! - Create a [`RenderSession`]
//! - Stream composited frames into a [`FrameSink`] ([`FfmpegSink`] for
//!   MP4 output, [`InMemorySink`] for tests)
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod encode;
pub mod field;
pub mod foundation;
pub mod plan;
pub mod render;
pub mod session;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex};
pub use crate::foundation::error::{DriftlabError, DriftlabResult};
pub use crate::foundation::math::SeededRng;

pub use crate::plan::model::{Color, LayerShape, LayerSpec, MotionStyle, Plan};
pub use crate::plan::synth::{DEFAULT_PROMPT, synthesize, synthesize_seeded};

pub use crate::field::motion::{MotionVector, resolve};
pub use crate::field::particle::{Particle, build_field};

pub use crate::render::compositor::compose_frame;
pub use crate::render::raster::{FrameRgba, Surface};

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};

pub use crate::session::render_session::{
    CancelToken, RenderOpts, RenderOutcome, RenderSession, SessionState,
};
pub use crate::session::runbook::{AgentStep, Runbook, StepStatus};
