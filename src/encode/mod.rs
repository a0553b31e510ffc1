//! Encoding sinks: the frame sink contract and the ffmpeg MP4 sink.

/// MP4 output via the system `ffmpeg`.
pub mod ffmpeg;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
