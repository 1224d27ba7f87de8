//! The failure taxonomy for caption rendering.
//!
//! Every stage of the pipeline maps its failures into exactly one of these
//! variants; nothing is retried and nothing recovers, so each variant is
//! terminal for its render. The `Internal` catch-all carries a fixed label
//! only; internal diagnostic detail never reaches the caller.

use imprint_render::RasterError;
use imprint_traits::{FontError, ResourceError, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Failed to download image: {0}")]
    FetchFailed(String),

    #[error("Invalid image format: {0}")]
    DecodeFailed(String),

    #[error("Font file not found: {0}")]
    FontNotFound(String),

    #[error("Font file is invalid: {0}")]
    FontInvalid(String),

    #[error("Invalid color format: {0}. Use 'R,G,B' (e.g. '255,0,0' for red)")]
    InvalidColor(String),

    #[error("Invalid text position: {0}")]
    InvalidAnchor(String),

    #[error("Error saving the final image: {0}")]
    SaveFailed(String),

    #[error("Internal rendering error")]
    Internal,
}

impl RenderError {
    /// Stable machine-readable tag for the boundary layer's error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderError::MissingParameter(_) => "missing_parameter",
            RenderError::FetchFailed(_) => "fetch_failed",
            RenderError::DecodeFailed(_) => "decode_failed",
            RenderError::FontNotFound(_) => "font_not_found",
            RenderError::FontInvalid(_) => "font_invalid",
            RenderError::InvalidColor(_) => "invalid_color",
            RenderError::InvalidAnchor(_) => "invalid_anchor",
            RenderError::SaveFailed(_) => "save_failed",
            RenderError::Internal => "internal_error",
        }
    }

    /// Whether the failure is the caller's input rather than a processing
    /// problem. Drives the boundary's bad-input vs processing-failed split.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            RenderError::MissingParameter(_)
                | RenderError::InvalidColor(_)
                | RenderError::InvalidAnchor(_)
                | RenderError::FontNotFound(_)
                | RenderError::FontInvalid(_)
        )
    }
}

impl From<ResourceError> for RenderError {
    fn from(e: ResourceError) -> Self {
        RenderError::FetchFailed(e.to_string())
    }
}

impl From<FontError> for RenderError {
    fn from(e: FontError) -> Self {
        match e {
            FontError::NotFound(name) => RenderError::FontNotFound(name),
            FontError::InvalidData { .. } | FontError::LoadFailed { .. } => {
                RenderError::FontInvalid(e.to_string())
            }
        }
    }
}

impl From<RasterError> for RenderError {
    fn from(e: RasterError) -> Self {
        match e {
            RasterError::Decode(message) => RenderError::DecodeFailed(message),
            RasterError::Encode(message) => RenderError::SaveFailed(message),
        }
    }
}

impl From<StoreError> for RenderError {
    fn from(e: StoreError) -> Self {
        RenderError::SaveFailed(e.to_string())
    }
}
