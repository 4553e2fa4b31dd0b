/// Convenience result type used across the renderer.
pub type WireframeResult<T> = Result<T, WireframeError>;

/// Top-level error taxonomy used by the composer and panel renderers.
#[derive(thiserror::Error, Debug)]
pub enum WireframeError {
    /// Malformed dataset handed to a renderer (arity mismatch, empty or non-finite series).
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry that does not fit the configured canvas.
    #[error("layout error: {0}")]
    Layout(String),

    /// Drawing surface creation or rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// PNG encoding or output write failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WireframeError {
    /// Build a [`WireframeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WireframeError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`WireframeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WireframeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
