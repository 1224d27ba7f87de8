//! Two-pass text compositing: shadow, then foreground.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use imprint_layout::{LoadedFont, PlacedLine};
use imprint_types::Color;

/// Pixel offset of the shadow pass below and right of the foreground.
pub const SHADOW_OFFSET: i32 = 2;

/// Fixed shadow color, chosen for contrast against the caption color.
const SHADOW_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Draw placed caption lines onto the image, mutating it in place.
///
/// Each line is drawn twice: the white shadow pass offset by
/// [`SHADOW_OFFSET`], then the foreground pass on top at the placed
/// position. The pass order means the foreground is never occluded by its
/// own shadow. Coordinates may be negative for overflowing blocks; the draw
/// clips to the canvas.
pub fn draw_caption(image: &mut RgbaImage, placed: &[PlacedLine], font: &LoadedFont, color: Color) {
    let fill = Rgba([color.r, color.g, color.b, 255]);
    for line in placed {
        draw_text_mut(
            image,
            SHADOW_COLOR,
            line.x + SHADOW_OFFSET,
            line.y + SHADOW_OFFSET,
            font.scale(),
            font.font(),
            &line.text,
        );
        draw_text_mut(
            image,
            fill,
            line.x,
            line.y,
            font.scale(),
            font.font(),
            &line.text,
        );
    }
}
