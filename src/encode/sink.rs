use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::DriftlabResult;
use crate::render::raster::FrameRgba;

/// Configuration provided to a [`FrameSink`] at the start of a render.
#[derive(Debug, Clone, Copy)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing
/// `FrameIndex` order. Exactly one of `end` (finalize into the output
/// artifact) or `abort` (discard partial output, release resources) is
/// called after the last `push_frame`.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> DriftlabResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgba) -> DriftlabResult<()>;
    /// Called once after the last frame; flushes in-flight data into the
    /// single output artifact.
    fn end(&mut self) -> DriftlabResult<()>;
    /// Tear down without finalizing; partial output is discarded.
    fn abort(&mut self);
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    aborted: bool,
    /// Frames in timeline order.
    pub(crate) frames: Vec<(FrameIndex, FrameRgba)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRgba)] {
        &self.frames
    }

    /// Whether the sink was torn down via `abort`.
    pub fn was_aborted(&self) -> bool {
        self.aborted
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> DriftlabResult<()> {
        self.cfg = Some(cfg);
        self.aborted = false;
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgba) -> DriftlabResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> DriftlabResult<()> {
        Ok(())
    }

    fn abort(&mut self) {
        self.frames.clear();
        self.aborted = true;
    }
}
