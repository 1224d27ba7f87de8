//! Vertical anchoring and horizontal centering of wrapped lines.

use crate::metrics::TextMetrics;
use imprint_types::VerticalAnchor;

/// Padding kept clear of the top and bottom canvas edges, in pixels.
pub const EDGE_PADDING: f32 = 20.0;

/// Extra vertical space between successive lines, in pixels.
pub const LINE_SPACING: f32 = 10.0;

/// One line of text with its top-left pixel position on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Compute pixel positions for wrapped lines on a canvas.
///
/// The block's vertical origin follows the anchor; each line is then centered
/// horizontally on its own, independent of the other lines' widths. When the
/// block is taller than the canvas, `middle` and `bottom` origins go negative
/// and are deliberately not clamped; the overflow is a visual artifact, not
/// an error.
pub fn place_lines(
    lines: Vec<String>,
    metrics: &dyn TextMetrics,
    line_height: f32,
    spacing: f32,
    canvas_width: u32,
    canvas_height: u32,
    anchor: VerticalAnchor,
) -> Vec<PlacedLine> {
    let total_text_height = lines.len() as f32 * (line_height + spacing);

    let origin_y = match anchor {
        VerticalAnchor::Top => EDGE_PADDING,
        VerticalAnchor::Middle => ((canvas_height as f32 - total_text_height) / 2.0).floor(),
        VerticalAnchor::Bottom => canvas_height as f32 - total_text_height - EDGE_PADDING,
    };

    let mut placed = Vec::with_capacity(lines.len());
    let mut y = origin_y;
    for text in lines {
        let line_width = metrics.measure(&text);
        let x = ((canvas_width as f32 - line_width) / 2.0).floor();
        placed.push(PlacedLine {
            text,
            x: x as i32,
            y: y.floor() as i32,
        });
        y += line_height + spacing;
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FixedAdvanceMetrics;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_top_anchor_is_edge_padding() {
        let m = FixedAdvanceMetrics::new(10.0, 40.0);
        for canvas_height in [50, 400, 2000] {
            let placed = place_lines(
                lines(&["a", "b", "c"]),
                &m,
                40.0,
                10.0,
                800,
                canvas_height,
                VerticalAnchor::Top,
            );
            assert_eq!(placed[0].y, 20);
        }
    }

    #[test]
    fn test_middle_anchor_centers_block() {
        let m = FixedAdvanceMetrics::new(10.0, 40.0);
        // Two lines at (40 + 10) each: total height 100 on a 400px canvas.
        let placed = place_lines(
            lines(&["one", "two"]),
            &m,
            40.0,
            10.0,
            800,
            400,
            VerticalAnchor::Middle,
        );
        assert_eq!(placed[0].y, 150);
    }

    #[test]
    fn test_middle_anchor_floors_odd_division() {
        let m = FixedAdvanceMetrics::new(10.0, 40.0);
        let placed = place_lines(
            lines(&["one", "two"]),
            &m,
            40.0,
            10.0,
            800,
            401,
            VerticalAnchor::Middle,
        );
        // (401 - 100) / 2 = 150.5, floored.
        assert_eq!(placed[0].y, 150);
    }

    #[test]
    fn test_bottom_anchor_leaves_edge_padding() {
        let m = FixedAdvanceMetrics::new(10.0, 40.0);
        let placed = place_lines(
            lines(&["only"]),
            &m,
            40.0,
            10.0,
            800,
            300,
            VerticalAnchor::Bottom,
        );
        // 300 - (40 + 10) - 20
        assert_eq!(placed[0].y, 230);
    }

    #[test]
    fn test_overflowing_block_goes_negative_unclamped() {
        let m = FixedAdvanceMetrics::new(10.0, 40.0);
        // Total height 150 on a 100px canvas.
        let middle = place_lines(
            lines(&["a", "b", "c"]),
            &m,
            40.0,
            10.0,
            800,
            100,
            VerticalAnchor::Middle,
        );
        assert_eq!(middle[0].y, -25);

        let bottom = place_lines(
            lines(&["a", "b", "c"]),
            &m,
            40.0,
            10.0,
            800,
            100,
            VerticalAnchor::Bottom,
        );
        assert_eq!(bottom[0].y, -70);
    }

    #[test]
    fn test_lines_advance_by_line_height_plus_spacing() {
        let m = FixedAdvanceMetrics::new(10.0, 40.0);
        let placed = place_lines(
            lines(&["a", "b", "c"]),
            &m,
            40.0,
            10.0,
            800,
            400,
            VerticalAnchor::Top,
        );
        assert_eq!(placed[0].y, 20);
        assert_eq!(placed[1].y, 70);
        assert_eq!(placed[2].y, 120);
    }

    #[test]
    fn test_each_line_is_centered_independently() {
        let m = FixedAdvanceMetrics::new(10.0, 40.0);
        let placed = place_lines(
            lines(&["wide line here", "thin"]),
            &m,
            40.0,
            10.0,
            200,
            400,
            VerticalAnchor::Top,
        );
        // 14 chars = 140px -> x = 30; 4 chars = 40px -> x = 80.
        assert_eq!(placed[0].x, 30);
        assert_eq!(placed[1].x, 80);
    }

    #[test]
    fn test_oversized_line_centers_negative() {
        let m = FixedAdvanceMetrics::new(10.0, 40.0);
        let placed = place_lines(
            lines(&["an oversized line"]),
            &m,
            40.0,
            10.0,
            100,
            400,
            VerticalAnchor::Top,
        );
        // 17 chars = 170px on a 100px canvas -> x = -35.
        assert_eq!(placed[0].x, -35);
    }

    #[test]
    fn test_empty_lines_place_nothing() {
        let m = FixedAdvanceMetrics::new(10.0, 40.0);
        let placed = place_lines(Vec::new(), &m, 40.0, 10.0, 800, 400, VerticalAnchor::Middle);
        assert!(placed.is_empty());
    }
}
