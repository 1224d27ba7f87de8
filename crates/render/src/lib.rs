//! Raster side of caption rendering: byte decode, text compositing, and
//! PNG encode.
//!
//! The compositor mutates a decoded image in place; decode and encode sit on
//! either side of it in the pipeline.

pub mod compositor;
pub mod error;
pub mod raster;

pub use compositor::{SHADOW_OFFSET, draw_caption};
pub use error::RasterError;
pub use raster::{decode_image, encode_png};
