use crate::session::render_session::CancelToken;
use std::time::Duration;

/// Status of one runbook step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// Not started.
    Pending,
    /// Currently displayed as running.
    Running,
    /// Finished.
    Done,
}

/// One display step of the agent runbook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentStep {
    /// Stable step id.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Display detail line.
    pub detail: &'static str,
    /// Current status.
    pub status: StepStatus,
}

fn step(id: &'static str, title: &'static str, detail: &'static str) -> AgentStep {
    AgentStep {
        id,
        title,
        detail,
        status: StepStatus::Pending,
    }
}

/// The fixed step sequence shown while a generation runs.
pub fn default_steps() -> Vec<AgentStep> {
    vec![
        step(
            "semantic",
            "Semantic Breakdown",
            "Decomposing prompt themes, moods, and motion cues.",
        ),
        step(
            "compositor",
            "Layer Composer",
            "Designing layered emitters, palettes, and rhythm grammar.",
        ),
        step(
            "render",
            "Realtime Renderer",
            "Synthesizing frames, injecting film grain, and encoding the clip.",
        ),
    ]
}

/// Cosmetic sequential status display with fixed pauses.
///
/// Purely presentational: it carries no computational effect on the plan
/// or the rendered frames, and shares only the cancel flag with the real
/// pipeline.
pub struct Runbook {
    steps: Vec<AgentStep>,
    pacing: Duration,
}

impl Runbook {
    /// Create a runbook paced by `pacing` per step (zero to skip pauses).
    pub fn new(pacing: Duration) -> Self {
        Self {
            steps: default_steps(),
            pacing,
        }
    }

    /// Current step statuses.
    pub fn steps(&self) -> &[AgentStep] {
        &self.steps
    }

    /// Play the step choreography to completion or cancellation.
    ///
    /// `on_update` fires after every status transition. Returns `false`
    /// when cancelled before the last step finished.
    pub fn play(&mut self, cancel: &CancelToken, mut on_update: impl FnMut(&[AgentStep])) -> bool {
        for i in 0..self.steps.len() {
            if cancel.is_cancelled() {
                return false;
            }
            for (j, s) in self.steps.iter_mut().enumerate() {
                s.status = match j.cmp(&i) {
                    std::cmp::Ordering::Less => StepStatus::Done,
                    std::cmp::Ordering::Equal => StepStatus::Running,
                    std::cmp::Ordering::Greater => StepStatus::Pending,
                };
            }
            on_update(&self.steps);
            if !self.pacing.is_zero() {
                std::thread::sleep(self.pacing);
            }
        }
        if cancel.is_cancelled() {
            return false;
        }
        for s in &mut self.steps {
            s.status = StepStatus::Done;
        }
        on_update(&self.steps);
        true
    }
}
