/// Convenience result type used across driftlab.
pub type DriftlabResult<T> = Result<T, DriftlabError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DriftlabError {
    /// Invalid user-provided or plan data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while compositing frames.
    #[error("render error: {0}")]
    Render(String),

    /// Errors from the encoding sink, including a missing encoder in the
    /// host environment.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DriftlabError {
    /// Build a [`DriftlabError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DriftlabError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DriftlabError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
