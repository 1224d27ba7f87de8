//! Inbound render request and its presence validation.

use crate::error::RenderError;
use serde::{Deserialize, Serialize};

/// Caption applied when a request omits `text`.
pub const DEFAULT_CAPTION: &str = "Do you accept credit card?";

/// Font pixel size applied when a request omits `text_size`.
pub const DEFAULT_TEXT_SIZE: u32 = 36;

/// One caption render request, as received from the transport boundary.
///
/// `image_url`, `font_name`, `color`, and `anchor` must all be present
/// before any rendering work starts; `text` and `text_size` have defaults.
/// Color and anchor stay in their external string forms here and are parsed
/// by the pipeline at their validation gates.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptionRequest {
    pub image_url: Option<String>,
    pub font_name: Option<String>,
    pub color: Option<String>,
    #[serde(alias = "position")]
    pub anchor: Option<String>,
    #[serde(default = "default_caption")]
    pub text: String,
    #[serde(default = "default_text_size")]
    pub text_size: u32,
}

fn default_caption() -> String {
    DEFAULT_CAPTION.to_string()
}

fn default_text_size() -> u32 {
    DEFAULT_TEXT_SIZE
}

/// A request with all required fields proven present.
#[derive(Debug)]
pub(crate) struct ValidatedRequest<'a> {
    pub image_url: &'a str,
    pub font_name: &'a str,
    pub color: &'a str,
    pub anchor: &'a str,
    pub text: &'a str,
    pub text_size: u32,
}

impl CaptionRequest {
    /// Check that every required field is present, reporting the first
    /// missing one by name.
    pub(crate) fn validate(&self) -> Result<ValidatedRequest<'_>, RenderError> {
        Ok(ValidatedRequest {
            image_url: required(&self.image_url, "image_url")?,
            font_name: required(&self.font_name, "font_name")?,
            color: required(&self.color, "color")?,
            anchor: required(&self.anchor, "anchor")?,
            text: &self.text,
            text_size: self.text_size,
        })
    }
}

fn required<'a>(
    field: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, RenderError> {
    field
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(RenderError::MissingParameter(name))
}
