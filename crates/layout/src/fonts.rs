//! Font loading and metrics for the layout engine.
//!
//! `FontLibrary` resolves a font identifier through the injected
//! `FontProvider` and parses the bytes into a `LoadedFont` scaled to the
//! requested pixel size. Nothing is cached: every render gets its own
//! `LoadedFont`, so concurrent renders never share font state.

use crate::metrics::TextMetrics;
use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont};
use imprint_traits::{FontError, FontProvider};
use std::sync::Arc;

/// Line height used when the reference glyph has no outline at the requested
/// scale. Degraded-continue: rendering proceeds with this approximation.
pub const FALLBACK_LINE_HEIGHT: f32 = 40.0;

/// Glyph whose pixel bounds define the line height of a render.
const REFERENCE_GLYPH: char = 'A';

/// Resolves font identifiers to ready-to-measure fonts.
pub struct FontLibrary {
    provider: Arc<dyn FontProvider>,
}

impl std::fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontLibrary")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl FontLibrary {
    pub fn new(provider: Arc<dyn FontProvider>) -> Self {
        Self { provider }
    }

    /// Load the named font at a pixel size.
    ///
    /// Fails with `FontError::NotFound` when the provider has no such font
    /// and `FontError::InvalidData` when the bytes cannot be parsed.
    pub fn load(&self, font_name: &str, px_size: f32) -> Result<LoadedFont, FontError> {
        let data = self.provider.load(font_name)?;
        log::debug!(
            "loaded font '{}' ({} bytes) via {}",
            font_name,
            data.len(),
            self.provider.name()
        );
        LoadedFont::from_bytes(font_name, data.as_ref().clone(), px_size)
    }
}

/// An immutable font handle at a fixed pixel size.
pub struct LoadedFont {
    font: FontArc,
    scale: PxScale,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("scale", &self.scale)
            .finish()
    }
}

impl LoadedFont {
    /// Parse raw font bytes at a pixel size. Sizes below 1px are clamped up.
    pub fn from_bytes(font_name: &str, data: Vec<u8>, px_size: f32) -> Result<Self, FontError> {
        let font = FontArc::try_from_vec(data).map_err(|e| FontError::InvalidData {
            name: font_name.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            font,
            scale: PxScale::from(px_size.max(1.0)),
        })
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    pub fn scale(&self) -> PxScale {
        self.scale
    }

    /// Pixel-bounds height of a reference glyph, or the fallback constant if
    /// the glyph has no outline at this scale.
    fn line_height_for(&self, reference: char) -> f32 {
        match self.glyph_bounds_height(reference) {
            Some(height) => height,
            None => {
                log::warn!(
                    "reference glyph '{}' has no outline at scale {:?}, using fallback line height {}",
                    reference,
                    self.scale,
                    FALLBACK_LINE_HEIGHT
                );
                FALLBACK_LINE_HEIGHT
            }
        }
    }

    fn glyph_bounds_height(&self, c: char) -> Option<f32> {
        let glyph = self.font.glyph_id(c).with_scale(self.scale);
        let outline = self.font.outline_glyph(glyph)?;
        Some(outline.px_bounds().height())
    }
}

impl TextMetrics for LoadedFont {
    /// Horizontal advance of the run, including kerning between pairs.
    fn measure(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    fn line_height(&self) -> f32 {
        self.line_height_for(REFERENCE_GLYPH)
    }
}
