/// Convenience result type used across ratiocrop.
pub type CropResult<T> = Result<T, CropError>;

/// Error taxonomy surfaced by every crop, layout, render and export entry point.
///
/// None of these conditions is transient, so nothing in the crate retries on them.
#[derive(thiserror::Error, Debug)]
pub enum CropError {
    /// Ratio text was malformed or not strictly positive.
    #[error("invalid ratio format: {0}")]
    InvalidFormat(String),

    /// A ratio equal (within tolerance) to an existing one was added.
    #[error("duplicate ratio: {0}")]
    DuplicateRatio(String),

    /// A contact sheet was requested with no ratios.
    #[error("empty request set: a contact sheet needs at least one ratio")]
    EmptyRequestSet,

    /// The source raster could not be read or sampled.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// Encoded image bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The output raster is too large to allocate.
    #[error("render target exhausted: {0}")]
    RenderTargetExhausted(String),

    /// The finished raster could not be serialized.
    #[error("encode failure: {0}")]
    EncodeFailure(String),

    /// Invalid caller-provided geometry or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CropError {
    /// Build a [`CropError::InvalidFormat`] value.
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Build a [`CropError::DuplicateRatio`] value.
    pub fn duplicate_ratio(msg: impl Into<String>) -> Self {
        Self::DuplicateRatio(msg.into())
    }

    /// Build a [`CropError::SourceUnavailable`] value.
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }

    /// Build a [`CropError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CropError::RenderTargetExhausted`] value.
    pub fn render_target_exhausted(msg: impl Into<String>) -> Self {
        Self::RenderTargetExhausted(msg.into())
    }

    /// Build a [`CropError::EncodeFailure`] value.
    pub fn encode_failure(msg: impl Into<String>) -> Self {
        Self::EncodeFailure(msg.into())
    }

    /// Build a [`CropError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
