/// Convenience result type used across Weblayer.
pub type WeblayerResult<T> = Result<T, WeblayerError>;

/// Top-level error taxonomy used by node APIs.
///
/// Failures inside the per-frame render path are contained by the node (one
/// frame's contribution is dropped); these variants surface only through the
/// setup-time and lifecycle APIs.
#[derive(thiserror::Error, Debug)]
pub enum WeblayerError {
    /// Invalid caller-provided geometry or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Surface lifecycle violations and re-provisioning failures.
    #[error("surface error: {0}")]
    Surface(String),

    /// Failures while emitting a surface into a frame target.
    #[error("composite error: {0}")]
    Composite(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WeblayerError {
    /// Build a [`WeblayerError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WeblayerError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`WeblayerError::Composite`] value.
    pub fn composite(msg: impl Into<String>) -> Self {
        Self::Composite(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
