//! Text layout engine for caption rendering.
//!
//! Three pieces, in pipeline order:
//!
//! - [`fonts`]: loads a named font at a pixel size and exposes measurement
//!   through the [`TextMetrics`] trait
//! - [`wrap`]: greedy word wrapping against a pixel width budget
//! - [`place`]: vertical anchoring and per-line horizontal centering
//!
//! Wrapping and placement depend only on [`TextMetrics`], never on a concrete
//! font, so layout math is testable with fixed-advance fakes.

pub mod fonts;
pub mod metrics;
pub mod place;
pub mod wrap;

pub use fonts::{FALLBACK_LINE_HEIGHT, FontLibrary, LoadedFont};
pub use metrics::TextMetrics;
pub use place::{EDGE_PADDING, LINE_SPACING, PlacedLine, place_lines};
pub use wrap::wrap_text;

#[cfg(test)]
mod test_utils;
