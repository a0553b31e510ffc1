//! Session-oriented rendering: the render loop / capture pipeline and the
//! cosmetic agent runbook timeline.

/// The render loop / capture pipeline with cancellation.
pub mod render_session;
/// Cosmetic agent-step status timeline.
pub mod runbook;
