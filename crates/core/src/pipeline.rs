//! The render orchestrator.
//!
//! One caption render is a fixed sequence of stages with a validation gate
//! between each: presence check, fetch, decode, font load, color parse,
//! anchor parse, wrap, placement, composite, encode, persist. Any gate
//! failure short-circuits to a [`RenderError`] without attempting later
//! stages. The pipeline is synchronous; concurrent renders share nothing but
//! the providers, which are read-only.

use crate::error::RenderError;
use crate::request::CaptionRequest;
use imprint_layout::{EDGE_PADDING, FontLibrary, LINE_SPACING, TextMetrics, place_lines, wrap_text};
use imprint_render::{decode_image, draw_caption, encode_png};
use imprint_traits::{FontProvider, OutputStore, ResourceProvider};
use imprint_types::{Color, VerticalAnchor};
use std::sync::Arc;

/// File extension of encoded outputs.
const OUTPUT_EXTENSION: &str = "png";

/// A successful render: the locator under which the output was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCaption {
    pub locator: String,
}

/// Sequences one render from request to persisted output.
pub struct Renderer {
    images: Arc<dyn ResourceProvider>,
    fonts: FontLibrary,
    store: Arc<dyn OutputStore>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("images", &self.images.name())
            .field("store", &self.store.name())
            .finish()
    }
}

impl Renderer {
    pub fn new(
        images: Arc<dyn ResourceProvider>,
        fonts: Arc<dyn FontProvider>,
        store: Arc<dyn OutputStore>,
    ) -> Self {
        Self {
            images,
            fonts: FontLibrary::new(fonts),
            store,
        }
    }

    /// Render one caption onto its source image.
    ///
    /// Every failure is one of the named [`RenderError`] variants; the
    /// line-height metric fallback is the only degraded-continue path.
    pub fn render(&self, request: &CaptionRequest) -> Result<RenderedCaption, RenderError> {
        let req = request.validate()?;

        let bytes = self.images.fetch(req.image_url)?;
        let mut image = decode_image(&bytes)?;

        let font = self.fonts.load(req.font_name, req.text_size as f32)?;

        let color: Color = req
            .color
            .parse()
            .map_err(RenderError::InvalidColor)?;
        let anchor: VerticalAnchor = req
            .anchor
            .parse()
            .map_err(RenderError::InvalidAnchor)?;

        let max_width = image.width() as f32 - 2.0 * EDGE_PADDING;
        let lines = wrap_text(req.text, &font, max_width);
        let line_height = font.line_height();
        let placed = place_lines(
            lines,
            &font,
            line_height,
            LINE_SPACING,
            image.width(),
            image.height(),
            anchor,
        );

        draw_caption(&mut image, &placed, &font, color);

        let encoded = encode_png(&image)?;
        let locator = self.store.store(&encoded, OUTPUT_EXTENSION)?;

        log::info!(
            "rendered {} caption line(s) onto {}x{} image -> {}",
            placed.len(),
            image.width(),
            image.height(),
            locator
        );
        Ok(RenderedCaption { locator })
    }
}
