/// Convenience result type used across the crate.
pub type CurveResult<T> = Result<T, CurveError>;

/// Top-level error taxonomy used by the synthesis and assembly APIs.
///
/// Rasterization and integral reduction do not use this type: malformed curve
/// data there yields `None` instead of an error.
#[derive(thiserror::Error, Debug)]
pub enum CurveError {
    /// Invalid caller-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while synthesizing keyframes.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Errors while producing raster output (encoding, buffer shape).
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors when serializing or deserializing curve data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CurveError {
    /// Build a [`CurveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CurveError::Synthesis`] value.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Build a [`CurveError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`CurveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CurveError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
