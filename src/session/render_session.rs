use crate::encode::sink::{FrameSink, SinkConfig};
use crate::field::particle::build_field;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::DriftlabResult;
use crate::foundation::math::SeededRng;
use crate::plan::model::Plan;
use crate::plan::synth::synthesize;
use crate::render::compositor::compose_frame;
use crate::render::raster::Surface;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Options controlling one render session's output geometry and cadence.
#[derive(Clone, Copy, Debug)]
pub struct RenderOpts {
    /// Output canvas.
    pub canvas: Canvas,
    /// Output frame cadence.
    pub fps: Fps,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 720,
                height: 720,
            },
            fps: Fps { num: 60, den: 1 },
        }
    }
}

/// Shared cancellation flag observed between frames.
///
/// Cloning yields a handle to the same flag, so a caller can cancel a
/// render in flight from the progress callback or another thread.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Observable session state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionState {
    /// No generation in progress.
    Idle,
    /// A plan is being synthesized.
    Planning,
    /// Frames are being composited and encoded.
    Rendering {
        /// Monotone completion fraction in `[0, 1]`.
        progress: f64,
    },
    /// The last generation finalized successfully.
    Ready,
    /// The last generation failed.
    Error,
}

/// Terminal outcome of a non-failing render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// All frames were composited and the sink finalized.
    Completed {
        /// Number of frames pushed to the sink.
        frames: u64,
    },
    /// The render was cancelled; partial sink output was discarded.
    Cancelled,
}

/// The render loop / capture pipeline.
///
/// Owns the raster surface and the cancellation flag for one generation
/// at a time; frames are composited and handed to the sink strictly in
/// increasing order, and the sink is released on every exit path
/// (success, error, or superseding cancellation).
pub struct RenderSession {
    opts: RenderOpts,
    state: SessionState,
    cancel: CancelToken,
}

impl RenderSession {
    /// Create a session with the given output options.
    pub fn new(opts: RenderOpts) -> Self {
        Self {
            opts,
            state: SessionState::Idle,
            cancel: CancelToken::new(),
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handle to the cancellation flag of the current/next generation.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Synthesize a plan for `prompt` and render it.
    pub fn generate(
        &mut self,
        prompt: &str,
        sink: &mut dyn FrameSink,
        on_progress: impl FnMut(f64),
    ) -> DriftlabResult<(Plan, RenderOutcome)> {
        self.state = SessionState::Planning;
        let plan = synthesize(prompt);
        let outcome = self.render(&plan, sink, on_progress)?;
        Ok((plan, outcome))
    }

    /// Render a plan's full duration into a sink, reporting progress once
    /// per frame.
    ///
    /// Progress is non-decreasing; the final report is exactly 1.0 before
    /// the terminal outcome. A new render supersedes any earlier cancelled
    /// generation by installing a fresh token, and the sink is torn down
    /// via `abort` on cancellation or failure, so at most one capture
    /// stream is ever live per session.
    #[tracing::instrument(level = "info", skip_all, fields(seed = plan.seed))]
    pub fn render(
        &mut self,
        plan: &Plan,
        sink: &mut dyn FrameSink,
        mut on_progress: impl FnMut(f64),
    ) -> DriftlabResult<RenderOutcome> {
        plan.validate()?;

        if self.cancel.is_cancelled() {
            self.cancel = CancelToken::new();
        }
        let cancel = self.cancel.clone();

        let canvas = self.opts.canvas;
        let fps = self.opts.fps;
        let duration = plan.duration_secs;
        let frame_dur = fps.frame_duration_secs();
        let frames_total = fps.secs_to_frames_round(duration).max(1);

        let mut rng = SeededRng::new(plan.seed);
        let particles = build_field(plan, &mut rng, canvas.width, canvas.height);
        let mut surface = Surface::new(canvas.width, canvas.height);

        if let Err(e) = sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps,
        }) {
            self.state = SessionState::Error;
            return Err(e);
        }

        for f in 0..frames_total {
            if cancel.is_cancelled() {
                sink.abort();
                self.state = SessionState::Idle;
                return Ok(RenderOutcome::Cancelled);
            }

            // The last frame lands exactly on the plan duration so the
            // final progress report is exactly 1.0.
            let elapsed = if f + 1 == frames_total {
                duration
            } else {
                ((f + 1) as f64 * frame_dur).min(duration)
            };
            let progress = elapsed / duration;

            compose_frame(&mut surface, plan, &particles, progress, elapsed);
            if let Err(e) = sink.push_frame(FrameIndex(f), &surface.to_frame()) {
                sink.abort();
                self.state = SessionState::Error;
                return Err(e);
            }

            self.state = SessionState::Rendering { progress };
            on_progress(progress);
        }

        if let Err(e) = sink.end() {
            sink.abort();
            self.state = SessionState::Error;
            return Err(e);
        }

        self.state = SessionState::Ready;
        Ok(RenderOutcome::Completed {
            frames: frames_total,
        })
    }
}
